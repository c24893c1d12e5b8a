use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| line.trim().parse::<i32>().map_err(|_| ParseError::number(line)))
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct SinglePart<const K: i32>;

impl<const K: i32> AocParser for SinglePart<K> {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl<const K: i32> PartSolver<1> for SinglePart<K> {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(format!("{}{}", shared, K))
    }
}

#[test]
fn test_parts_constant_matches_attribute() {
    assert_eq!(<TestSolver as Solver>::PARTS, 2);
    assert_eq!(<SinglePart<3> as Solver>::PARTS, 1);
}

#[test]
fn test_dispatch_routes_to_part_solvers() {
    let mut parsed = TestSolver::parse("1\n2\n3\n4").unwrap();

    assert_eq!(TestSolver::solve_part(&mut parsed, 1).unwrap(), "10");
    assert_eq!(TestSolver::solve_part(&mut parsed, 2).unwrap(), "24");
}

#[test]
fn test_unknown_part_not_implemented() {
    let mut parsed = TestSolver::parse("1").unwrap();

    assert!(matches!(
        TestSolver::solve_part(&mut parsed, 3),
        Err(SolveError::PartNotImplemented(3))
    ));
    assert!(matches!(
        TestSolver::solve_part(&mut parsed, 0),
        Err(SolveError::PartNotImplemented(0))
    ));
}

#[test]
fn test_generic_solver_borrows_input() {
    let input = String::from("k=");
    let mut parsed = SinglePart::<7>::parse(&input).unwrap();
    assert_eq!(SinglePart::<7>::solve_part(&mut parsed, 1).unwrap(), "k=7");
}
