//! The scene player state machine.

use stagecraft_character::Cast;
use stagecraft_core::clock::{Clock, elapsed_ms};
use stagecraft_scene::{ChoiceId, DialogueNode, NodeId, Scene, SceneId, validate};

use crate::decisions::DecisionRecord;
use crate::error::{EngineError, Precondition};
use crate::signals::SceneSignal;
use crate::state::SceneState;

const NODE_INVARIANT: &str = "validated scene graph resolves every traversed node id";

#[derive(Debug)]
struct ActiveScene {
    scene: Scene,
    state: SceneState,
}

/// Owns at most one active scene and drives its traversal.
///
/// Activation is exclusive: a second `activate` while a scene is in flight
/// is rejected, never queued. Every mutating operation returns the signals
/// it produced, in order; a failed precondition returns an error and leaves
/// all state untouched.
#[derive(Debug, Default)]
pub struct ScenePlayer {
    active: Option<ActiveScene>,
}

impl ScenePlayer {
    /// Creates a player with no active scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a scene currently holds the stage.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Runtime state of the active scene, for rendering.
    #[must_use]
    pub fn state(&self) -> Option<&SceneState> {
        self.active.as_ref().map(|a| &a.state)
    }

    /// The dialogue node currently holding the stage.
    #[must_use]
    pub fn current_node(&self) -> Option<&DialogueNode> {
        let active = self.active.as_ref()?;
        active.scene.node(&active.state.current_node_id)
    }

    /// Activates a scene.
    ///
    /// Validates the graph first; a rejected scene mutates nothing. On
    /// success the start node is entered: visited history starts, the cast
    /// is built from the scene's cues, and the start node's speaker is
    /// marked before the `NodeEntered` signal is emitted.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidSceneGraph`] when validation fails;
    /// [`EngineError::DoubleActivation`] while another scene is active.
    pub fn activate(
        &mut self,
        scene: Scene,
        clock: &dyn Clock,
    ) -> Result<Vec<SceneSignal>, EngineError> {
        if let Some(active) = &self.active {
            return Err(EngineError::DoubleActivation {
                active_scene_id: active.state.scene_id.clone(),
            });
        }
        validate(&scene)?;

        let start = scene.node(&scene.start_node_id).expect(NODE_INVARIANT);
        let mut cast = Cast::from_cues(&scene.characters);
        cast.set_speaker(start.character_id.as_ref(), start.emotion.as_ref());

        let state = SceneState {
            scene_id: scene.id.clone(),
            current_node_id: scene.start_node_id.clone(),
            visited: vec![scene.start_node_id.clone()],
            cast,
            decisions: DecisionRecord::default(),
            started_at: clock.now(),
        };

        tracing::info!(scene_id = %state.scene_id, node_id = %state.current_node_id, "scene activated");

        let signal = SceneSignal::NodeEntered {
            scene_id: state.scene_id.clone(),
            node_id: state.current_node_id.clone(),
        };
        self.active = Some(ActiveScene { scene, state });
        Ok(vec![signal])
    }

    /// Selects a choice on the current node.
    ///
    /// Records the decision and emits `DecisionRecorded` before the
    /// transition. The destination is the choice's `next_node_id`, falling
    /// back to the node's own `next_node_id`; when neither is present the
    /// scene completes.
    ///
    /// # Errors
    ///
    /// A [`Precondition`] when no scene is active, the choice is not on the
    /// current node, or the choice is disabled. All of these are no-ops.
    pub fn select_choice(
        &mut self,
        choice_id: &ChoiceId,
        clock: &dyn Clock,
    ) -> Result<Vec<SceneSignal>, EngineError> {
        let Some(active) = self.active.as_mut() else {
            return Err(Precondition::NoActiveScene.into());
        };

        let node = active
            .scene
            .node(&active.state.current_node_id)
            .expect(NODE_INVARIANT);
        let Some(choice) = node.choice(choice_id) else {
            return Err(Precondition::UnknownChoice {
                node_id: node.id.clone(),
                choice_id: choice_id.clone(),
            }
            .into());
        };
        if choice.disabled {
            return Err(Precondition::DisabledChoice {
                node_id: node.id.clone(),
                choice_id: choice_id.clone(),
            }
            .into());
        }

        let node_id = node.id.clone();
        let node_next = node.next_node_id.clone();
        let choice = choice.clone();

        if choice.next_node_id.is_none() && node_next.is_some() {
            tracing::debug!(
                scene_id = %active.state.scene_id,
                node_id = %node_id,
                choice_id = %choice.id,
                "choice has no destination; falling back to the node's next link"
            );
        }

        active
            .state
            .decisions
            .record(node_id.clone(), choice.id.clone());
        tracing::debug!(scene_id = %active.state.scene_id, node_id = %node_id, choice_id = %choice.id, "decision recorded");

        let next = choice.next_node_id.clone().or(node_next);
        let mut signals = vec![SceneSignal::DecisionRecorded {
            scene_id: active.state.scene_id.clone(),
            node_id,
            choice,
        }];
        match next {
            Some(next_id) => signals.push(Self::enter_node(active, next_id)),
            None => signals.push(self.complete(clock)),
        }
        Ok(signals)
    }

    /// Advances past a choice-less node.
    ///
    /// # Errors
    ///
    /// A [`Precondition`] when no scene is active or the current node waits
    /// for a choice. Both are no-ops.
    pub fn advance(&mut self, clock: &dyn Clock) -> Result<Vec<SceneSignal>, EngineError> {
        let Some(active) = self.active.as_mut() else {
            return Err(Precondition::NoActiveScene.into());
        };

        let node = active
            .scene
            .node(&active.state.current_node_id)
            .expect(NODE_INVARIANT);
        if node.has_choices() {
            return Err(Precondition::AutoAdvanceOnChoiceNode {
                node_id: node.id.clone(),
            }
            .into());
        }

        let signal = match node.next_node_id.clone() {
            Some(next_id) => Self::enter_node(active, next_id),
            None => self.complete(clock),
        };
        Ok(vec![signal])
    }

    /// Short-circuits a skippable scene straight to completion.
    ///
    /// Decisions recorded so far are carried into the completion signal;
    /// missing ones are never synthesized.
    ///
    /// # Errors
    ///
    /// A [`Precondition`] when no scene is active or the scene is authored
    /// as unskippable. Both are no-ops.
    pub fn skip(&mut self, clock: &dyn Clock) -> Result<Vec<SceneSignal>, EngineError> {
        let Some(active) = self.active.as_ref() else {
            return Err(Precondition::NoActiveScene.into());
        };
        if !active.scene.can_skip {
            return Err(Precondition::SkipNotAllowed {
                scene_id: active.state.scene_id.clone(),
            }
            .into());
        }

        tracing::info!(scene_id = %active.state.scene_id, "scene skipped");
        Ok(vec![self.complete(clock)])
    }

    /// Discards the active scene without a completion signal.
    ///
    /// Cancellation semantics: choices not yet made are simply dropped.
    /// Returns the id of the scene that was terminated, or `None` when no
    /// scene was active (idempotent).
    pub fn terminate(&mut self) -> Option<SceneId> {
        let active = self.active.take()?;
        tracing::info!(
            scene_id = %active.state.scene_id,
            decisions = active.state.decisions.len(),
            "scene terminated without completion"
        );
        Some(active.state.scene_id)
    }

    /// Transitions onto `next_id`: history, then cast, then the signal.
    fn enter_node(active: &mut ActiveScene, next_id: NodeId) -> SceneSignal {
        let node = active.scene.node(&next_id).expect(NODE_INVARIANT);
        let speaker = node.character_id.clone();
        let emotion = node.emotion.clone();

        active.state.current_node_id = next_id.clone();
        active.state.visited.push(next_id.clone());
        active.state.cast.set_speaker(speaker.as_ref(), emotion.as_ref());

        tracing::debug!(scene_id = %active.state.scene_id, node_id = %next_id, "node entered");
        SceneSignal::NodeEntered {
            scene_id: active.state.scene_id.clone(),
            node_id: next_id,
        }
    }

    /// Clears the active scene and produces the completion signal.
    fn complete(&mut self, clock: &dyn Clock) -> SceneSignal {
        let active = self
            .active
            .take()
            .expect("complete is only reached with an active scene");
        let duration_ms = elapsed_ms(active.state.started_at, clock.now());

        tracing::info!(
            scene_id = %active.state.scene_id,
            decisions = active.state.decisions.len(),
            duration_ms,
            "scene completed"
        );
        SceneSignal::SceneCompleted {
            scene_id: active.state.scene_id,
            decisions: active.state.decisions,
            duration_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use stagecraft_core::clock::Clock;
    use stagecraft_scene::{ChoiceId, NodeId, SceneGraphError};
    use stagecraft_test_support::{
        FixedClock, SteppingClock, auto_node, branching_scene, choice, choice_node, cue,
        monologue_scene, scene,
    };

    use super::ScenePlayer;
    use crate::error::{EngineError, Precondition};
    use crate::signals::SceneSignal;

    fn fixed_clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap())
    }

    #[test]
    fn test_activate_enters_start_node_with_speaker_set() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();

        // Act
        let signals = player.activate(branching_scene(), &clock).unwrap();

        // Assert
        assert_eq!(
            signals,
            vec![SceneSignal::NodeEntered {
                scene_id: "branching".into(),
                node_id: "intro".into(),
            }]
        );
        let state = player.state().unwrap();
        assert_eq!(state.visited, vec![NodeId::from("intro")]);
        assert_eq!(state.started_at, clock.now());
        assert_eq!(state.cast.speaker(), Some(&"mentor".into()));
    }

    #[test]
    fn test_double_activation_is_rejected() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(branching_scene(), &clock).unwrap();

        // Act
        let err = player.activate(monologue_scene(), &clock).unwrap_err();

        // Assert: the first scene is still the one on stage.
        assert_eq!(
            err,
            EngineError::DoubleActivation {
                active_scene_id: "branching".into(),
            }
        );
        assert_eq!(player.state().unwrap().scene_id, "branching".into());
    }

    #[test]
    fn test_invalid_graph_is_rejected_and_leaves_no_active_scene() {
        // Arrange
        let mut player = ScenePlayer::new();
        let broken = scene(
            "broken",
            vec![],
            vec![auto_node("a", "mentor", "…", Some("ghost"))],
        );

        // Act
        let err = player.activate(broken, &fixed_clock()).unwrap_err();

        // Assert
        assert!(matches!(
            err,
            EngineError::InvalidSceneGraph(SceneGraphError::DanglingNextNode { .. })
        ));
        assert!(!player.is_active());
        assert!(player.current_node().is_none());
    }

    #[test]
    fn test_select_choice_records_decision_before_transition() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(branching_scene(), &clock).unwrap();

        // Act
        let signals = player.select_choice(&ChoiceId::from("c1"), &clock).unwrap();

        // Assert: decision first, then the node change.
        assert_eq!(signals.len(), 2);
        assert!(matches!(
            &signals[0],
            SceneSignal::DecisionRecorded { node_id, choice, .. }
                if node_id == &NodeId::from("intro") && choice.id == "c1".into()
        ));
        assert!(matches!(
            &signals[1],
            SceneSignal::NodeEntered { node_id, .. } if node_id == &NodeId::from("warm-up")
        ));

        let state = player.state().unwrap();
        assert_eq!(state.decisions.get(&"intro".into()), Some(&"c1".into()));
        assert_eq!(state.cast.speaker(), Some(&"founder".into()));
    }

    #[test]
    fn test_branch_then_advance_completes_with_decision_map() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(branching_scene(), &clock).unwrap();
        player.select_choice(&ChoiceId::from("c2"), &clock).unwrap();

        // Act: "cold-open" is terminal, so advancing completes the scene.
        let signals = player.advance(&clock).unwrap();

        // Assert
        match &signals[..] {
            [SceneSignal::SceneCompleted { scene_id, decisions, duration_ms }] => {
                assert_eq!(scene_id, &"branching".into());
                assert_eq!(decisions.len(), 1);
                assert_eq!(decisions.get(&"intro".into()), Some(&"c2".into()));
                assert_eq!(*duration_ms, 0);
            }
            other => panic!("expected a lone SceneCompleted, got {other:?}"),
        }
        assert!(!player.is_active());
    }

    #[test]
    fn test_identical_input_sequences_are_deterministic() {
        // Arrange
        let clock = fixed_clock();
        let run = |choice_id: &str| {
            let mut player = ScenePlayer::new();
            player.activate(branching_scene(), &clock).unwrap();
            let mut signals = player
                .select_choice(&ChoiceId::from(choice_id), &clock)
                .unwrap();
            signals.extend(player.advance(&clock).unwrap());
            signals
        };

        // Act / Assert
        assert_eq!(run("c1"), run("c1"));
    }

    #[test]
    fn test_skip_completes_with_decisions_recorded_so_far() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(branching_scene(), &clock).unwrap();

        // Act
        let signals = player.skip(&clock).unwrap();

        // Assert: no decision is synthesized.
        match &signals[..] {
            [SceneSignal::SceneCompleted { decisions, .. }] => assert!(decisions.is_empty()),
            other => panic!("expected a lone SceneCompleted, got {other:?}"),
        }
        assert!(!player.is_active());
    }

    #[test]
    fn test_skip_is_rejected_when_scene_is_unskippable() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        let mut unskippable = monologue_scene();
        unskippable.can_skip = false;
        player.activate(unskippable, &clock).unwrap();

        // Act
        let err = player.skip(&clock).unwrap_err();

        // Assert
        assert_eq!(
            err,
            EngineError::Precondition(Precondition::SkipNotAllowed {
                scene_id: "monologue".into(),
            })
        );
        assert!(player.is_active());
    }

    #[test]
    fn test_disabled_choice_is_a_reported_no_op() {
        // Arrange
        let mut disabled = choice("locked", "Call the investor.", Some("warm-up"));
        disabled.disabled = true;
        disabled.disabled_reason = Some(String::from("No investor contact yet"));
        let scene = scene(
            "gated",
            vec![cue("mentor", stagecraft_scene::StagePosition::Left)],
            vec![
                choice_node("intro", "mentor", "What now?", vec![disabled]),
                auto_node("warm-up", "mentor", "…", None),
            ],
        );
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(scene, &clock).unwrap();

        // Act
        let err = player
            .select_choice(&ChoiceId::from("locked"), &clock)
            .unwrap_err();

        // Assert: no transition, no decision, no signal.
        assert_eq!(
            err,
            EngineError::Precondition(Precondition::DisabledChoice {
                node_id: "intro".into(),
                choice_id: "locked".into(),
            })
        );
        let state = player.state().unwrap();
        assert_eq!(state.current_node_id, "intro".into());
        assert!(state.decisions.is_empty());
    }

    #[test]
    fn test_unknown_choice_is_a_reported_no_op() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(branching_scene(), &clock).unwrap();

        // Act
        let err = player
            .select_choice(&ChoiceId::from("c99"), &clock)
            .unwrap_err();

        // Assert
        assert_eq!(
            err,
            EngineError::Precondition(Precondition::UnknownChoice {
                node_id: "intro".into(),
                choice_id: "c99".into(),
            })
        );
        assert_eq!(player.state().unwrap().current_node_id, "intro".into());
    }

    #[test]
    fn test_advance_is_rejected_on_a_choice_node() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(branching_scene(), &clock).unwrap();

        // Act / Assert
        assert_eq!(
            player.advance(&clock).unwrap_err(),
            EngineError::Precondition(Precondition::AutoAdvanceOnChoiceNode {
                node_id: "intro".into(),
            })
        );
    }

    #[test]
    fn test_operations_without_an_active_scene_report_the_precondition() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();

        // Act / Assert
        assert_eq!(
            player.advance(&clock).unwrap_err(),
            EngineError::Precondition(Precondition::NoActiveScene)
        );
        assert_eq!(
            player.select_choice(&ChoiceId::from("c1"), &clock).unwrap_err(),
            EngineError::Precondition(Precondition::NoActiveScene)
        );
        assert_eq!(
            player.skip(&clock).unwrap_err(),
            EngineError::Precondition(Precondition::NoActiveScene)
        );
        assert!(player.terminate().is_none());
    }

    #[test]
    fn test_choice_without_destination_falls_back_to_node_link() {
        // Arrange: the choice is destination-less; the node carries the
        // default forward link.
        let mut opener = choice_node(
            "intro",
            "mentor",
            "Shall we?",
            vec![choice("go", "Yes.", None)],
        );
        opener.next_node_id = Some("outro".into());
        let scene = scene(
            "fallback",
            vec![cue("mentor", stagecraft_scene::StagePosition::Left)],
            vec![opener, auto_node("outro", "mentor", "Good.", None)],
        );
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(scene, &clock).unwrap();

        // Act
        let signals = player.select_choice(&ChoiceId::from("go"), &clock).unwrap();

        // Assert
        assert!(matches!(
            &signals[1],
            SceneSignal::NodeEntered { node_id, .. } if node_id == &NodeId::from("outro")
        ));
    }

    #[test]
    fn test_cyclic_graph_revisit_overwrites_decision_and_terminates() {
        // Arrange: a choice node that loops back onto itself.
        let cyclic = scene(
            "cyclic",
            vec![cue("mentor", stagecraft_scene::StagePosition::Left)],
            vec![
                choice_node(
                    "loop",
                    "mentor",
                    "Go around again?",
                    vec![
                        choice("again", "One more lap.", Some("loop")),
                        choice("exit", "We're done.", Some("end")),
                    ],
                ),
                auto_node("end", "mentor", "Finally.", None),
            ],
        );
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(cyclic, &clock).unwrap();

        // Act: take the loop once, then the exit.
        player.select_choice(&ChoiceId::from("again"), &clock).unwrap();
        let state = player.state().unwrap();
        assert_eq!(state.visited, vec![NodeId::from("loop"), NodeId::from("loop")]);
        assert_eq!(state.decisions.get(&"loop".into()), Some(&"again".into()));

        player.select_choice(&ChoiceId::from("exit"), &clock).unwrap();
        let signals = player.advance(&clock).unwrap();

        // Assert: the revisit overwrote the node's entry and the walk ended.
        match &signals[..] {
            [SceneSignal::SceneCompleted { decisions, .. }] => {
                assert_eq!(decisions.len(), 1);
                assert_eq!(decisions.get(&"loop".into()), Some(&"exit".into()));
            }
            other => panic!("expected a lone SceneCompleted, got {other:?}"),
        }
        assert!(!player.is_active());
    }

    #[test]
    fn test_exactly_one_speaker_after_every_transition() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(monologue_scene(), &clock).unwrap();

        // Act / Assert: walk the whole scene checking the invariant.
        loop {
            let state = player.state().unwrap();
            let speaking = state.cast.iter().filter(|(_, s)| s.is_speaking).count();
            assert_eq!(speaking, 1);
            assert_eq!(
                state.cast.speaker(),
                player.current_node().unwrap().character_id.as_ref()
            );

            let signals = player.advance(&clock).unwrap();
            if matches!(signals[0], SceneSignal::SceneCompleted { .. }) {
                break;
            }
        }
    }

    #[test]
    fn test_visited_history_follows_traversal_order() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(monologue_scene(), &clock).unwrap();

        // Act
        player.advance(&clock).unwrap();
        player.advance(&clock).unwrap();

        // Assert
        assert_eq!(
            player.state().unwrap().visited,
            vec![
                NodeId::from("one"),
                NodeId::from("two"),
                NodeId::from("three"),
            ]
        );
    }

    #[test]
    fn test_completion_duration_tracks_the_injected_clock() {
        // Arrange
        let clock = SteppingClock::starting_at(Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap());
        let mut player = ScenePlayer::new();
        player.activate(branching_scene(), &clock).unwrap();
        clock.advance_ms(7250);

        // Act
        let signals = player.skip(&clock).unwrap();

        // Assert
        assert!(matches!(
            &signals[..],
            [SceneSignal::SceneCompleted { duration_ms: 7250, .. }]
        ));
    }

    #[test]
    fn test_terminate_discards_state_without_completion() {
        // Arrange
        let mut player = ScenePlayer::new();
        let clock = fixed_clock();
        player.activate(branching_scene(), &clock).unwrap();
        player.select_choice(&ChoiceId::from("c1"), &clock).unwrap();

        // Act
        let ended = player.terminate();

        // Assert: the partial decision record is simply dropped.
        assert_eq!(ended, Some("branching".into()));
        assert!(!player.is_active());
        assert!(player.state().is_none());
    }
}
