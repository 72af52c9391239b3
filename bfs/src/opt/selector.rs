use varpack::VPError;
use varpack::entities::{Assignment, Objective};

/// Best assignment seen so far, ranked by [`Objective`].
///
/// Only a strictly better objective replaces the incumbent, so among equally good
/// assignments the first one offered is kept.
#[derive(Debug, Clone, Default)]
pub struct Incumbent {
    best: Option<(Objective, Assignment)>,
}

impl Incumbent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers an assignment, returns `true` if it became the new incumbent.
    pub fn offer(&mut self, objective: Objective, assignment: Assignment) -> bool {
        let improves = match &self.best {
            None => true,
            Some((best, _)) => objective > *best,
        };
        if improves {
            self.best = Some((objective, assignment));
        }
        improves
    }

    /// Combines two incumbents, `self` must stem from an earlier part of the enumeration than `later`.
    /// Associative, the earlier incumbent wins ties.
    pub fn merge(self, later: Incumbent) -> Incumbent {
        let later_wins = match (self.objective(), later.objective()) {
            (Some(a), Some(b)) => b > a,
            (None, Some(_)) => true,
            (_, None) => false,
        };
        match later_wins {
            true => later,
            false => self,
        }
    }

    pub fn objective(&self) -> Option<Objective> {
        self.best.as_ref().map(|(o, _)| *o)
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        self.best.as_ref().map(|(_, a)| a)
    }

    /// The best assignment and its objective, or [`VPError::Infeasible`] if nothing was offered.
    pub fn into_best(self) -> Result<(Assignment, Objective), VPError> {
        self.best
            .map(|(o, a)| (a, o))
            .ok_or(VPError::Infeasible)
    }
}

/// Selects the best of the feasible assignments in a single pass:
/// most items allocated first, highest occupancy product second, earliest assignment on ties.
pub fn select(
    feasible: impl IntoIterator<Item = Assignment>,
    overflow_id: usize,
) -> Result<(Assignment, Objective), VPError> {
    let mut incumbent = Incumbent::new();
    for assignment in feasible {
        incumbent.offer(Objective::of(&assignment, overflow_id), assignment);
    }
    incumbent.into_best()
}
