use criterion::{criterion_group, criterion_main, Criterion};
use geojson_shapes::contains::{BoundaryRule, Containment};
use geojson_shapes::geometry::Coordinate;
use geojson_shapes::index::RegionIndex;
use geojson_shapes::output::Output;
use geojson_shapes::load_shapes;
use std::fs;
use std::io::{Cursor, Result, Write};

struct MockWriter;

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(buf.len())
    }
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

pub fn load_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhoods");
    let text = fs::read_to_string("./tests/data/neighborhoods.geojson").unwrap();
    group.bench_function("load_shapes", |b| {
        b.iter(|| {
            let shapes = load_shapes(Cursor::new(&text), Some("ntaname"), &[]).unwrap();
            let mut writer = MockWriter;
            shapes.write_json_lines(&mut writer).unwrap();
        })
    });
    group.finish();
}

pub fn contains_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighborhoods");
    let text = fs::read_to_string("./tests/data/neighborhoods.geojson").unwrap();
    let shapes = load_shapes(Cursor::new(&text), Some("ntaname"), &[]).unwrap();
    let point = Coordinate::new(-73.988, 40.67);
    group.bench_function("contains", |b| {
        b.iter(|| shapes.iter().filter(|s| s.shape.contains(point)).count())
    });
    let index = RegionIndex::new(shapes.clone(), BoundaryRule::Inclusive);
    group.bench_function("region_index", |b| b.iter(|| index.locate(point).len()));
    group.finish();
}

criterion_group!(benches, load_bench, contains_bench);
criterion_main!(benches);
