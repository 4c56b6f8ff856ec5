use criterion::{Criterion, black_box, criterion_group, criterion_main};
use faer::Mat;
use relax::{ErrorMode, solve_gauss_seidel, solve_jacobi, solve_sor};

fn bench_stationary(c: &mut Criterion) {
    let n = 100;
    // tridiagonal, strictly diagonally dominant
    let a = Mat::from_fn(n, n, |i, j| {
        if i == j {
            4.0
        } else if i.abs_diff(j) == 1 {
            -1.0
        } else {
            0.0
        }
    });
    let b: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();
    let x0 = vec![0.0; n];

    c.bench_function("jacobi n=100", |ben| {
        ben.iter(|| solve_jacobi(black_box(&x0), black_box(&a), black_box(&b), 1e-10, 1000, ErrorMode::Absolute).unwrap())
    });
    c.bench_function("gauss-seidel n=100", |ben| {
        ben.iter(|| {
            solve_gauss_seidel(black_box(&x0), black_box(&a), black_box(&b), 1e-10, 1000, ErrorMode::Absolute).unwrap()
        })
    });
    c.bench_function("sor(1.1) n=100", |ben| {
        ben.iter(|| solve_sor(black_box(&x0), black_box(&a), black_box(&b), 1e-10, 1000, 1.1, ErrorMode::Absolute).unwrap())
    });
}

criterion_group!(benches, bench_stationary);
criterion_main!(benches);
