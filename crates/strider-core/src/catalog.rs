use crate::ForwardModel;

/// Enumerates the legal logical actions available from a state.
///
/// The returned order is part of the planner's determinism contract:
/// implementations must return actions in a fixed order for a given
/// state, the way a grid search fixes its neighbor order. An empty
/// vector is legal and simply yields no successors for that node.
pub trait ActionCatalog<M: ForwardModel> {
    fn actions(&self, model: &M) -> Vec<M::Action>;
}

impl<M: ForwardModel, C: ActionCatalog<M>> ActionCatalog<M> for &C {
    fn actions(&self, model: &M) -> Vec<M::Action> {
        (**self).actions(model)
    }
}
