use criterion::{criterion_group, criterion_main, Criterion};
use picasa_ini::parse_fn::{decode_filter_chain, decode_rectangle};
use picasa_ini::parser::parse_reader;
use std::fmt::Write;
use std::hint::black_box;
use std::io::Cursor;
use std::path::Path;

fn sample_ini(albums: usize, contacts: usize) -> String {
    let mut ini = String::from("[Picasa]\nname=Bench\ndate=43586.500000\ncategory=Folders on Disk\n");
    ini.push_str("[Contacts2]\n");
    for i in 0..contacts {
        let _ = writeln!(ini, "{:016x}=Person {};;", i, i);
    }
    for i in 0..albums {
        let _ = writeln!(
            ini,
            "[.album:{:012x}]\nname=Album {}\ndate=2019-05-01T10:00:00+02:00\ntoken={:012x}",
            i, i, i
        );
    }
    // Picture sections point at files that do not exist and are skipped.
    for i in 0..albums {
        let _ = writeln!(
            ini,
            "[IMG_{:04}.JPG]\nstar=yes\nfilters=enhance=1;crop64=1,30a730d2bf1ab897;",
            i
        );
    }
    ini
}

fn bench_parser(c: &mut Criterion) {
    let ini = sample_ini(200, 200);
    let folder = Path::new("/nonexistent/bench");
    let source = folder.join(".picasa.ini");

    c.bench_function("parse_reader 200 albums", |b| {
        b.iter(|| {
            let _ = parse_reader(Cursor::new(black_box(ini.as_bytes())), &source, folder);
        })
    });

    c.bench_function("decode_rectangle", |b| {
        b.iter(|| decode_rectangle(black_box("rect64(3f845bcb59418507)")))
    });

    c.bench_function("decode_filter_chain", |b| {
        b.iter(|| {
            decode_filter_chain(black_box(
                "crop64=1,30a730d2bf1ab897;enhance=1;finetune2=1,0.000000,0.000000,0.190000,00000000,0.000000;",
            ))
        })
    });
}

criterion_group!(benches, bench_parser);
criterion_main!(benches);
