//! End-to-end: parse text input, solve, compare methods and feed the reporters.

use relax::input::{parse_matrix, parse_vector};
use relax::{
    EquationReporter, LinearSystem, MethodKind, ResultReporter, SolverOptions, StationaryContext,
    TableReporter, compare_methods,
};

fn parsed_system() -> LinearSystem {
    let a = parse_matrix("[[10, -1, 2], [-1, 11, -1], [2, -1, 10]]").unwrap();
    let b = parse_vector("6, 25, -11").unwrap();
    LinearSystem::new(a, b).unwrap()
}

#[test]
fn table_has_one_row_per_iteration() {
    let system = parsed_system();
    let ctx = StationaryContext::new(
        SolverOptions::default().with_method(MethodKind::Sor).with_omega(1.05).with_tol(1e-8),
    );
    let res = ctx.solve_context(&system, &[0.0; 3]).unwrap();
    assert!(res.converged());

    let mut table = TableReporter::new(Vec::new());
    table.report(&system, &res).unwrap();
    let text = String::from_utf8(table.into_inner()).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "N,x1,x2,x3,E");
    assert_eq!(lines.len(), res.iterations() + 1);
    for (line, k) in lines[1..].iter().zip(res.iteration_indices()) {
        assert!(line.starts_with(&format!("{k},")));
        assert_eq!(line.split(',').count(), 5);
    }
}

#[test]
fn equation_shows_final_iterate() {
    let system = parsed_system();
    let ctx = StationaryContext::new(SolverOptions::default().with_tol(1e-10));
    let res = ctx.solve_context(&system, &[0.0; 3]).unwrap();

    let mut eq = EquationReporter::new(Vec::new());
    eq.report(&system, &res).unwrap();
    let text = String::from_utf8(eq.into_inner()).unwrap();
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("10.00    -1.00    2.00"));
    assert!(text.contains("25.00"));
}

#[test]
fn comparison_ranks_converged_methods() {
    let system = parsed_system();
    let opts = SolverOptions::default().with_tol(1e-8).with_omega(1.05);
    let cmp = compare_methods(&system, &[0.0; 3], &opts).unwrap();
    assert_eq!(cmp.runs.len(), 3);
    assert!(cmp.runs.iter().all(|r| r.result.converged()));
    let best = cmp.best_by_iterations().unwrap();
    let jacobi = cmp.get(MethodKind::Jacobi).unwrap();
    assert!(best.result.iterations() <= jacobi.result.iterations());
    assert!(cmp.lowest_error().is_some());
}
