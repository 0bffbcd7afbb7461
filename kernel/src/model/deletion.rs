/// Outcome of a guarded-deletion check: the dependents still referencing
/// the parent. Deletion may proceed only when there are none; a non-empty
/// result is a normal outcome presented to the caller, not an error.
#[derive(Debug)]
pub struct DeletionCheck<C> {
    blockers: Vec<C>,
}

impl<C> DeletionCheck<C> {
    pub fn new(blockers: Vec<C>) -> Self {
        Self { blockers }
    }

    pub fn allowed(&self) -> bool {
        self.blockers.is_empty()
    }

    pub fn blockers(&self) -> &[C] {
        &self.blockers
    }

    pub fn into_blockers(self) -> Vec<C> {
        self.blockers
    }
}
