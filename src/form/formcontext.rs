use super::formdata::{FormData, FormUpdate};

/// Owns the current form snapshot. Each update replaces the snapshot with a
/// new value; earlier snapshots handed out by `data()` never change.
#[derive(Clone, Debug, Default)]
pub struct FormContext {
    data: FormData
}

impl FormContext {
    pub fn new(data: FormData) -> FormContext {
        FormContext { data }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn update(&mut self, update: FormUpdate) -> &FormData {
        self.data = self.data.apply(&update);
        &self.data
    }

    pub fn reset(&mut self) {
        self.data = FormData::default();
    }
}
