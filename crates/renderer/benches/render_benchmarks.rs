use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::Array2;
use renderer::png::create_png_auto;
use renderer::{render_rgba, ScaleOptions};

fn synthetic_disk(npix: usize) -> Array2<f64> {
    let c = (npix as f64 - 1.0) / 2.0;
    Array2::from_shape_fn((npix, npix), |(iy, ix)| {
        let r = ((ix as f64 - c).powi(2) + (iy as f64 - c).powi(2)).sqrt() + 1.0;
        1e-11 * r.powf(-1.5)
    })
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for npix in [101usize, 301, 601] {
        let data = synthetic_disk(npix);
        let opts = ScaleOptions::default();

        group.bench_with_input(BenchmarkId::new("rgba", npix), &data, |b, data| {
            b.iter(|| render_rgba(black_box(data.view()), &opts))
        });

        let pixels = render_rgba(data.view(), &opts).unwrap();
        group.bench_with_input(BenchmarkId::new("png_auto", npix), &pixels, |b, pixels| {
            b.iter(|| create_png_auto(black_box(pixels), npix, npix))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
