//! Integration tests for batch activation against a mock solver

use std::path::{Path, PathBuf};

use actools_activation::{
    ActivationRequest, Activator, Chain, ChainNuclide, Config, DepletionInput, DepletionSolver,
    EnergyGroups, Error, MaterialSnapshot, Material, Metric, NuclideState, RequestError, Result,
    SolverContext, TimeUnit,
};
use rstest::{fixture, rstest};

/// Stands in for the external solver and records what it was given
#[derive(Default)]
struct MockSolver {
    chain_path: Option<PathBuf>,
    materials: Vec<String>,
    fluxes: Vec<Vec<f64>>,
    reactions: Vec<String>,
    reaction_mts: Vec<u32>,
    workdirs: Vec<PathBuf>,
    cross_sections: Vec<Option<PathBuf>>,
    reduce_chain_level: Option<u32>,
    fail_on: Option<usize>,
    truncate_on: Option<usize>,
    needs_cross_sections: bool,
}

impl MockSolver {
    fn failing_on(call: usize) -> Self {
        Self {
            fail_on: Some(call),
            ..Default::default()
        }
    }
}

fn state(name: &str, mass: f64, activity: f64) -> NuclideState {
    NuclideState {
        name: name.to_string(),
        atoms: mass * 1.0e22,
        mass,
        activity,
        heat: 0.0,
    }
}

impl DepletionSolver for MockSolver {
    type Snapshot = MaterialSnapshot;

    fn requires_cross_sections(&self) -> bool {
        self.needs_cross_sections
    }

    fn load_chain(&mut self, path: &Path) -> Result<Chain> {
        self.chain_path = Some(path.to_path_buf());
        Ok(Chain {
            nuclides: vec![
                ChainNuclide::new("Co59", &["(n,gamma)", "(n,2n)"]),
                ChainNuclide::new("Co60", &["(n,gamma)"]),
                ChainNuclide::new("Ni60", &[]),
            ],
        })
    }

    fn deplete(
        &mut self,
        context: &SolverContext,
        input: &DepletionInput,
    ) -> Result<Vec<MaterialSnapshot>> {
        let call = self.materials.len();
        self.materials.push(input.material.name.clone());
        self.fluxes.push(input.flux.to_vec());
        self.reactions = input.reactions.to_vec();
        self.reaction_mts = input.reaction_mts.to_vec();
        self.workdirs.push(context.workdir.to_path_buf());
        self.cross_sections
            .push(context.cross_sections().ok().map(Path::to_path_buf));
        self.reduce_chain_level = context.reduce_chain_level;

        // something in the scratch directory, as a real solver would
        std::fs::write(context.workdir.join("depletion_results.h5"), b"data")?;

        if self.fail_on == Some(call) {
            return Err(Error::solver("integration did not converge"));
        }

        if self.needs_cross_sections {
            context.cross_sections()?;
        }

        // Co60 only appears at the end of the second step
        let mut snapshots = vec![MaterialSnapshot {
            nuclides: vec![state("Co59", 10.0, 0.0)],
        }];
        for step in 1..=input.timesteps.len() {
            let mut nuclides = vec![state("Co59", 10.0 - step as f64, 0.0)];
            if step == 2 {
                nuclides.push(state("Co60", 1.5, 6.2e10));
                nuclides.push(state("H1", 0.5, 0.0));
            }
            snapshots.push(MaterialSnapshot { nuclides });
        }

        // initial state only, as if the run stopped early
        if self.truncate_on == Some(call) {
            snapshots.truncate(1);
        }

        Ok(snapshots)
    }
}

fn request(name: &str) -> ActivationRequest {
    ActivationRequest::new(
        Material::new(name, 8.9, 1.0).with_temperature(293.6),
        vec![1.0e10, 3.0e10],
        EnergyGroups::Boundaries(vec![1.0e-5, 1.0e6, 14.1e6]),
        vec![1.0e12, 0.0],
        vec![10.0, 20.0],
    )
}

#[fixture]
fn requests() -> Vec<ActivationRequest> {
    vec![request("first"), request("second"), request("third")]
}

#[rstest]
fn results_follow_input_order(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver::default();
    let results = Activator::new(requests)
        .with_chain_file("chain.json")
        .activate(&mut solver, &[Metric::Mass])
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(solver.materials, vec!["first", "second", "third"]);
}

#[rstest]
fn flux_is_normalised(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver::default();
    Activator::new(requests)
        .with_chain_file("chain.json")
        .activate(&mut solver, &[Metric::Mass])
        .unwrap();

    for flux in &solver.fluxes {
        assert_eq!(flux, &vec![0.25, 0.75]);
    }
}

#[rstest]
fn defaults_come_from_chain(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver::default();
    let results = Activator::new(requests)
        .with_chain_file("chain.json")
        .with_unit(TimeUnit::Days)
        .activate(&mut solver, &[Metric::Mass])
        .unwrap();

    assert_eq!(solver.reactions, vec!["(n,gamma)", "(n,2n)"]);
    assert_eq!(solver.reaction_mts, vec![102, 16]);

    let mass = results[0].get(Metric::Mass).unwrap();
    assert_eq!(mass.time(), &[0.0, 10.0, 30.0]);
    assert_eq!(mass.get("Co60").unwrap(), &[0.0, 0.0, 1.5]);
    assert_eq!(mass.get("Co59").unwrap(), &[10.0, 9.0, 8.0]);

    // in the chain but never produced
    assert!(mass.get("Ni60").is_none());

    // H1 is not in the chain but still counts towards the total
    assert_eq!(mass.total(), &[10.0, 9.0, 10.0]);
}

#[rstest]
fn explicit_nuclides_and_reactions(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver::default();
    let results = Activator::new(requests)
        .with_chain_file("chain.json")
        .with_nuclides(&["co-60"])
        .with_reactions(&["(n,gamma)"])
        .activate(&mut solver, &[Metric::Mass, Metric::Activity])
        .unwrap();

    assert_eq!(solver.reaction_mts, vec![102]);

    let activity = results[0].get(Metric::Activity).unwrap();
    assert_eq!(activity.nuclides().len(), 1);
    assert_eq!(activity.get("Co60").unwrap(), &[0.0, 0.0, 6.2e10]);
    assert!(results[0].get(Metric::Mass).unwrap().get("Co59").is_none());
}

#[rstest]
fn empty_metrics_default_to_mass(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver::default();
    let results = Activator::new(requests)
        .with_chain_file("chain.json")
        .activate(&mut solver, &[])
        .unwrap();

    assert_eq!(results[0].len(), 1);
    assert!(results[0].get(Metric::Mass).is_some());
}

#[rstest]
fn missing_temperature_fails_before_solver(mut requests: Vec<ActivationRequest>) {
    requests[1] = ActivationRequest::new(
        Material::new("cold", 8.9, 1.0),
        vec![1.0],
        EnergyGroups::Boundaries(vec![0.0, 1.0]),
        vec![1.0],
        vec![1.0],
    );

    let mut solver = MockSolver::default();
    let error = Activator::new(requests)
        .with_chain_file("chain.json")
        .activate(&mut solver, &[Metric::Mass])
        .unwrap_err();

    assert!(matches!(error, Error::MissingTemperature { index: 1, .. }));
    assert!(solver.chain_path.is_none());
    assert!(solver.materials.is_empty());
}

#[rstest]
#[case(vec![1.0], vec![1.0e6, 1.0e5], RequestError::NotAscending { position: 1 })]
#[case(vec![1.0, 1.0], vec![0.0, 1.0], RequestError::LengthMismatch { flux: 2, boundaries: 2 })]
#[case(vec![0.0], vec![0.0, 1.0], RequestError::ZeroFlux)]
fn malformed_requests_are_identified(
    mut requests: Vec<ActivationRequest>,
    #[case] flux: Vec<f64>,
    #[case] bounds: Vec<f64>,
    #[case] expected: RequestError,
) {
    requests[2] = ActivationRequest::new(
        Material::new("bad", 8.9, 1.0).with_temperature(293.6),
        flux,
        EnergyGroups::Boundaries(bounds),
        vec![1.0],
        vec![1.0],
    );

    let mut solver = MockSolver::default();
    let error = Activator::new(requests)
        .with_chain_file("chain.json")
        .activate(&mut solver, &[Metric::Mass])
        .unwrap_err();

    match error {
        Error::InvalidRequest { index, source } => {
            assert_eq!(index, 2);
            assert_eq!(source, expected);
        }
        e => panic!("unexpected error {e:?}"),
    }
    assert!(solver.materials.is_empty());
}

#[rstest]
fn chain_file_resolution(requests: Vec<ActivationRequest>) {
    // neither source
    let mut solver = MockSolver::default();
    let error = Activator::new(requests.clone())
        .activate(&mut solver, &[Metric::Mass])
        .unwrap_err();
    assert!(matches!(error, Error::MissingChainFile { .. }));

    // configuration only
    let mut solver = MockSolver::default();
    Activator::new(requests.clone())
        .with_config(Config::default().with_chain_file("configured.json"))
        .activate(&mut solver, &[Metric::Mass])
        .unwrap();
    let path = solver.chain_path.unwrap();
    assert!(path.is_absolute());
    assert!(path.ends_with("configured.json"));

    // explicit argument wins
    let mut solver = MockSolver::default();
    Activator::new(requests)
        .with_config(Config::default().with_chain_file("configured.json"))
        .with_chain_file("explicit.json")
        .activate(&mut solver, &[Metric::Mass])
        .unwrap();
    assert!(solver.chain_path.unwrap().ends_with("explicit.json"));
}

#[rstest]
fn cross_sections_are_passed_through(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver::default();
    Activator::new(requests.clone())
        .with_chain_file("chain.json")
        .activate(&mut solver, &[Metric::Mass])
        .unwrap();
    assert!(solver.cross_sections.iter().all(Option::is_none));

    let mut solver = MockSolver::default();
    Activator::new(requests)
        .with_config(Config::default().with_cross_sections("xs.xml"))
        .with_chain_file("chain.json")
        .with_reduce_chain_level(None)
        .activate(&mut solver, &[Metric::Mass])
        .unwrap();
    assert_eq!(solver.cross_sections[0], Some(PathBuf::from("xs.xml")));
    assert_eq!(solver.reduce_chain_level, None);
}

#[rstest]
fn unknown_reaction_is_rejected(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver::default();
    let error = Activator::new(requests)
        .with_chain_file("chain.json")
        .with_reactions(&["(n,banana)"])
        .activate(&mut solver, &[Metric::Mass])
        .unwrap_err();

    assert!(matches!(error, Error::UnknownReaction(r) if r == "(n,banana)"));
}

#[rstest]
fn solver_failure_aborts_batch(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver::failing_on(1);
    let error = Activator::new(requests)
        .with_chain_file("chain.json")
        .activate(&mut solver, &[Metric::Mass])
        .unwrap_err();

    assert!(matches!(error, Error::Solver(_)));
    assert_eq!(solver.materials, vec!["first", "second"]);
}

#[rstest]
fn solver_failure_can_be_isolated(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver::failing_on(1);
    let results = Activator::new(requests)
        .with_chain_file("chain.json")
        .activate_isolated(&mut solver, &[Metric::Mass])
        .unwrap();

    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(Error::Solver(_))));
    assert!(results[2].is_ok());
}

#[rstest]
#[case(None)]
#[case(Some(0))]
fn scratch_directory_is_removed(requests: Vec<ActivationRequest>, #[case] fail_on: Option<usize>) {
    let mut solver = MockSolver {
        fail_on,
        ..Default::default()
    };
    let _ = Activator::new(requests)
        .with_chain_file("chain.json")
        .activate(&mut solver, &[Metric::Mass]);

    assert!(!solver.workdirs.is_empty());
    for dir in &solver.workdirs {
        assert_eq!(dir, &solver.workdirs[0]);
        assert!(!dir.exists());
    }
}

#[rstest]
fn missing_snapshots_are_rejected(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver {
        truncate_on: Some(0),
        ..Default::default()
    };
    let error = Activator::new(requests)
        .with_chain_file("chain.json")
        .activate(&mut solver, &[Metric::Mass])
        .unwrap_err();

    assert!(matches!(
        error,
        Error::SnapshotCount {
            index: 0,
            expected: 3,
            found: 1
        }
    ));
    assert_eq!(solver.materials, vec!["first"]);
}

#[rstest]
fn missing_snapshots_are_isolated(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver {
        truncate_on: Some(1),
        ..Default::default()
    };
    let results = Activator::new(requests)
        .with_chain_file("chain.json")
        .activate_isolated(&mut solver, &[Metric::Mass])
        .unwrap();

    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(Error::SnapshotCount { index: 1, .. })
    ));
    assert!(results[2].is_ok());
}

#[rstest]
#[case::abort(false)]
#[case::isolated(true)]
fn required_cross_sections_fail_the_batch(
    requests: Vec<ActivationRequest>,
    #[case] isolated: bool,
) {
    let mut solver = MockSolver {
        needs_cross_sections: true,
        ..Default::default()
    };
    let activator = Activator::new(requests).with_chain_file("chain.json");

    let error = if isolated {
        activator
            .activate_isolated(&mut solver, &[Metric::Mass])
            .unwrap_err()
    } else {
        activator.activate(&mut solver, &[Metric::Mass]).unwrap_err()
    };

    assert!(matches!(error, Error::MissingCrossSections { .. }));
    assert!(solver.materials.is_empty());
}

#[rstest]
fn required_cross_sections_from_argument(requests: Vec<ActivationRequest>) {
    let mut solver = MockSolver {
        needs_cross_sections: true,
        ..Default::default()
    };
    let results = Activator::new(requests)
        .with_chain_file("chain.json")
        .with_cross_sections("xs.xml")
        .activate_isolated(&mut solver, &[Metric::Mass])
        .unwrap();

    assert!(results.iter().all(Result::is_ok));
    assert!(solver
        .cross_sections
        .iter()
        .all(|xs| xs.as_deref() == Some(Path::new("xs.xml"))));
}
