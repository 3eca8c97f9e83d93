use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shortseg_core::Threshold;
use shortseg_filter::{filter_stream, FilterOptions};

fn sample_gcode(moves: usize) -> String {
    let mut gcode = String::from("G28\nG1 Z0.2 F3000\n");
    for i in 0..moves {
        let t = i as f64 * 0.01;
        gcode.push_str(&format!(
            "G1 X{:.3} Y{:.3} E{:.5}\n",
            50.0 + 20.0 * t.cos(),
            50.0 + 20.0 * t.sin(),
            t * 0.05
        ));
    }
    gcode
}

fn bench_filter_stream(c: &mut Criterion) {
    let gcode = sample_gcode(100_000);
    let options = FilterOptions::new(Threshold::default());

    c.bench_function("filter_stream_100k_moves", |b| {
        b.iter(|| {
            let mut sink = Vec::with_capacity(gcode.len() + 1024);
            filter_stream(black_box(gcode.as_bytes()), &mut sink, options)
        })
    });
}

criterion_group!(benches, bench_filter_stream);
criterion_main!(benches);
