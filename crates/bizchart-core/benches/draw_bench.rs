use bizchart_core::{Chart, ChartType, DataSource, RecordingSurface, Rect};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_chart(kind: ChartType, categories: usize) -> Chart {
    let mut ds = DataSource::new("Bench");
    for r in 0..3 {
        let values = (0..categories).map(|i| (2000 + i, ((i * 53 + r * 17) % 900) as f64 + 100.0));
        ds.add_series(format!("R{r}"), values, None);
    }
    let mut chart = Chart::with_seed(kind, 7);
    chart.update_bounds(Rect::from_ltwh(0, 0, 800, 500));
    chart.set_data_source(ds);
    chart
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_recording");
    for kind in ChartType::ALL {
        let chart = build_chart(kind, 50);
        group.bench_function(kind.name(), |b| {
            let mut surface = RecordingSurface::new();
            b.iter(|| {
                surface.clear();
                chart.draw(&mut surface, chart.bounds());
                black_box(surface.commands.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_draw);
criterion_main!(benches);
