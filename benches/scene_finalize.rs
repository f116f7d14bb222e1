use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use ray_scene::core::bvh::BvhBuilder;
use ray_scene::core::device::Device;
use ray_scene::core::diagnostics::NullSink;
use ray_scene::core::sphere::SphereData;
use ray_scene::model::SceneModel;
use ray_scene::primitive::Geometry;
use ray_scene::scenes::{create_scene, SceneKind};
use std::sync::Arc;

fn particle_spheres(count: usize) -> Vec<SphereData> {
    (0..count)
        .map(|i| {
            let x = ((i as f32 * 0.1) % 20.0) - 10.0;
            let y = ((i as f32 * 0.2) % 20.0) - 10.0;
            let z = -((i as f32 * 0.3) % 50.0) - 10.0;
            SphereData::new(Vec3::new(x, y, z), 0.5, [1.0, 1.0, 1.0])
        })
        .collect()
}

fn quiet_device() -> Device {
    Device::default().with_sink(Arc::new(NullSink))
}

/// SAH build + flatten of a single geometry's hierarchy
fn bench_blas_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("blas_build");
    let builder = BvhBuilder::default();

    for count in [100, 1000, 10000].iter() {
        let spheres = particle_spheres(*count);
        group.bench_with_input(BenchmarkId::new("spheres", count), count, |b, _| {
            b.iter(|| black_box(builder.build(&spheres).map(|root| root.flatten())))
        });
    }

    group.finish();
}

/// Full model rebuild: one geometry per chunk of spheres
fn bench_model_finalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_finalize");

    for geometries in [1usize, 16, 128].iter() {
        let mut device = quiet_device();
        let mut model = SceneModel::new(&device);
        for chunk in particle_spheres(8192).chunks(8192 / geometries) {
            model.add_geometry(Geometry::spheres(&device, chunk.to_vec()));
        }

        group.bench_with_input(BenchmarkId::new("geometries", geometries), geometries, |b, _| {
            b.iter(|| {
                model.finalize(&mut device).unwrap();
                black_box(model.bounds().unwrap())
            })
        });
    }

    group.finish();
}

fn bench_walls_scene(c: &mut Criterion) {
    let mut device = quiet_device();
    let mut model = create_scene(SceneKind::Walls, &device).unwrap();

    c.bench_function("walls_scene_finalize", |b| {
        b.iter(|| {
            model.finalize(&mut device).unwrap();
            black_box(model.structure().unwrap().structure_handle())
        })
    });
}

criterion_group!(benches, bench_blas_build, bench_model_finalize, bench_walls_scene);
criterion_main!(benches);
