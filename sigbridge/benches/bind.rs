use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::{Array1, Array2};
use rand::Rng;
use sigbridge::kernel::Lifecycle;
use sigbridge::{
    array_to_matrix, array_to_vector, matrix_to_array, HostObject, Matrix, MatrixConfig, Smpl,
};

/// Random samples in `[-1, 1)`.
fn noise(rows: usize, length: usize) -> Array2<Smpl> {
    let mut rng = rand::rng();
    Array2::from_shape_simple_fn((rows, length), || rng.random_range(-1.0..1.0))
}

fn bind_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_to_vector");
    for &n in &[512usize, 4096, 65536] {
        let samples: Array1<Smpl> = noise(1, n).into_shape_with_order(n).expect("one row");
        let mut host: HostObject = samples.into();
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let vec = array_to_vector(Some(&mut host)).expect("valid vector");
                black_box(vec.length())
            })
        });
    }
    group.finish();
}

fn bind_and_materialize_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    for &(rows, length) in &[(8usize, 512usize), (64, 1024), (256, 2048)] {
        let id = format!("{rows}x{length}");

        let mut host: HostObject = noise(rows, length).into();
        group.bench_function(BenchmarkId::new("array_to_matrix", &id), |b| {
            b.iter(|| {
                let mut mat = Matrix::try_new(MatrixConfig { height: rows }).expect("valid height");
                array_to_matrix(Some(&mut host), &mut mat).expect("valid matrix");
                black_box(mat.length())
            })
        });

        let mut host: HostObject = noise(rows, length).into();
        let mut mat = Matrix::try_new(MatrixConfig { height: rows }).expect("valid height");
        array_to_matrix(Some(&mut host), &mut mat).expect("valid matrix");
        group.bench_function(BenchmarkId::new("matrix_to_array", &id), |b| {
            b.iter(|| black_box(matrix_to_array(&mat)))
        });
    }
    group.finish();
}

criterion_group!(benches, bind_vector, bind_and_materialize_matrix);
criterion_main!(benches);
