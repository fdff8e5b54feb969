use crate::api::{PlayerId, ShotOutcome};

/// Step of the shot location wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Pool,
    Goal,
    Outcome,
    /// Only reached after a GOAL outcome
    Assist,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Pool => "Shot location",
            WizardStep::Goal => "Goal placement",
            WizardStep::Outcome => "Outcome",
            WizardStep::Assist => "Assist",
        }
    }
}

/// Input to the wizard. Coordinates are already in domain units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WizardEvent {
    PickPool { x: f64, y: f64 },
    PickGoal { x: f64, y: f64 },
    Next,
    Back,
    ChooseOutcome(ShotOutcome),
    /// `None` is an explicit "No Assist"
    ChooseAssist(Option<PlayerId>),
    Cancel,
}

/// Completed shot emitted once by the wizard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotRecord {
    pub pool_x: f64,
    pub pool_y: f64,
    pub goal_x: f64,
    pub goal_y: f64,
    pub outcome: ShotOutcome,
    pub assister_id: Option<PlayerId>,
}

/// Result of feeding one event to the wizard
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Still open, now at this step
    Open(WizardStep),
    /// Event not valid in the current step; nothing changed
    Ignored,
    Emitted(ShotRecord),
    Cancelled,
}

/// Four-step shot capture: pool -> goal -> outcome -> assist
///
/// The wizard never talks to the store. Emission and cancellation both leave
/// it back at the initial state, so one value is reused for every shot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShotWizard {
    step: WizardStep,
    pool: Option<(f64, f64)>,
    goal: Option<(f64, f64)>,
    outcome: Option<ShotOutcome>,
}

impl ShotWizard {
    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn pool(&self) -> Option<(f64, f64)> {
        self.pool
    }

    pub fn goal(&self) -> Option<(f64, f64)> {
        self.goal
    }

    pub fn outcome(&self) -> Option<ShotOutcome> {
        self.outcome
    }

    /// Apply one event. `scorer` is the shooting player, who cannot assist themselves.
    pub fn handle(&mut self, event: WizardEvent, scorer: PlayerId) -> Transition {
        use WizardEvent::*;
        use WizardStep::*;

        match (self.step, event) {
            (_, Cancel) => {
                self.reset();
                Transition::Cancelled
            }

            (Pool, PickPool { x, y }) => {
                self.pool = Some((x, y));
                Transition::Open(Pool)
            }
            (Pool, Next) if self.pool.is_some() => self.advance(Goal),

            (Goal, PickGoal { x, y }) => {
                self.goal = Some((x, y));
                Transition::Open(Goal)
            }
            (Goal, Next) if self.goal.is_some() => self.advance(Outcome),
            (Goal, Back) => self.advance(Pool),

            (Outcome, ChooseOutcome(outcome)) => {
                self.outcome = Some(outcome);
                if outcome == ShotOutcome::Goal {
                    self.advance(Assist)
                } else {
                    self.finish(None)
                }
            }
            (Outcome, Back) => self.advance(Goal),

            (Assist, ChooseAssist(Some(player))) if player == scorer => Transition::Ignored,
            (Assist, ChooseAssist(assister)) => self.finish(assister),
            (Assist, Back) => self.advance(Outcome),

            _ => Transition::Ignored,
        }
    }

    fn advance(&mut self, step: WizardStep) -> Transition {
        self.step = step;
        Transition::Open(step)
    }

    fn finish(&mut self, assister_id: Option<PlayerId>) -> Transition {
        let (Some((pool_x, pool_y)), Some((goal_x, goal_y)), Some(outcome)) =
            (self.pool, self.goal, self.outcome)
        else {
            return Transition::Ignored;
        };
        self.reset();
        Transition::Emitted(ShotRecord {
            pool_x,
            pool_y,
            goal_x,
            goal_y,
            outcome,
            assister_id,
        })
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
