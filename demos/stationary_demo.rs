use relax::input::{parse_matrix, parse_vector};
use relax::{
    EquationReporter, LinearSystem, ResultReporter, SolverOptions, TableReporter, compare_methods,
};

fn main() -> Result<(), relax::KError> {
    let a = parse_matrix("4, 1, 0\n1, 4, 1\n0, 1, 4")?;
    let b = parse_vector("5, 6, 5")?;
    let system = LinearSystem::new(a, b)?;
    let x0 = vec![0.0; system.dim()];

    let opts = SolverOptions::default().with_tol(1e-8).with_omega(1.1);
    let cmp = compare_methods(&system, &x0, &opts)?;
    println!("{cmp}\n");

    if let Some(best) = cmp.best_by_iterations() {
        println!("{}", best.result.final_message());
        let stdout = std::io::stdout();
        TableReporter::new(stdout.lock()).report(&system, &best.result)?;
        EquationReporter::new(stdout.lock()).report(&system, &best.result)?;
    }
    Ok(())
}
