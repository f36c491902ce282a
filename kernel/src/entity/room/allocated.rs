use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Fromln, AsRefln)]
pub struct IsAllocated(bool);

impl IsAllocated {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}
