//! Tests for oracle contract enforcement at the model boundary.

use diamond_sim::{
    Event, EventModel, GameSim, GameState, Pitch, PitchType, SimConfig, SimError, SimRng,
    SimulationRunner, StaticPitchModel,
};

/// Event model that returns whatever vector it was built with.
struct RawVectorModel {
    probabilities: Vec<f32>,
}

impl EventModel for RawVectorModel {
    fn event_probabilities(&self, _pitch: &Pitch, _state: &GameState) -> Result<Vec<f32>, SimError> {
        Ok(self.probabilities.clone())
    }
}

fn sim_with_vector(probabilities: Vec<f32>) -> GameSim<StaticPitchModel, RawVectorModel> {
    GameSim::new(
        StaticPitchModel::center_cut_fastball(),
        RawVectorModel { probabilities },
        SimConfig::default(),
    )
}

#[test]
fn test_short_vector_aborts_the_game() {
    let sim = sim_with_vector(vec![1.0; 5]);
    let mut rng = SimRng::new(42);

    let err = sim.play_game(&mut rng).unwrap_err();
    assert_eq!(
        err,
        SimError::ProbabilityShape {
            expected: Event::COUNT,
            actual: 5
        }
    );
}

#[test]
fn test_nan_probability_aborts_the_game() {
    let mut probs = vec![0.5; Event::COUNT];
    probs[12] = f32::NAN;
    let sim = sim_with_vector(probs);
    let mut rng = SimRng::new(42);

    assert!(matches!(
        sim.play_game(&mut rng),
        Err(SimError::NonFiniteProbability { index: 12, .. })
    ));
}

#[test]
fn test_all_subthreshold_mass_aborts_the_game() {
    let sim = sim_with_vector(vec![5e-4; Event::COUNT]);
    let mut rng = SimRng::new(42);

    assert_eq!(
        sim.play_game(&mut rng).unwrap_err(),
        SimError::DegenerateDistribution
    );
}

#[test]
fn test_runner_propagates_oracle_errors() {
    let mut runner = SimulationRunner::new(
        StaticPitchModel::center_cut_fastball(),
        RawVectorModel {
            probabilities: vec![1.0; 3],
        },
        SimConfig::new().with_seed(1),
    );

    assert!(matches!(
        runner.run(5),
        Err(SimError::ProbabilityShape { .. })
    ));
}

#[test]
fn test_unknown_event_label_is_fatal_at_parse() {
    let err = Event::from_label("Infield Fly").unwrap_err();
    assert_eq!(err, SimError::UnknownEvent("Infield Fly".to_string()));
}

#[test]
fn test_unknown_pitch_type_is_fatal_at_parse() {
    let err = PitchType::from_code("XX").unwrap_err();
    assert_eq!(err, SimError::UnknownPitchType("XX".to_string()));
}

#[test]
fn test_known_vocabularies_parse() {
    for event in Event::ALL {
        assert_eq!(Event::from_label(event.label()).unwrap(), event);
    }
    for pt in PitchType::ALL {
        assert_eq!(PitchType::from_code(pt.code()).unwrap(), pt);
    }
}
