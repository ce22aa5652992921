//! Fresh temporary and label names

/// Hands out `t1`, `t2`, ... and `L1`, `L2`, ...
#[derive(Debug, Clone, Default)]
pub struct TempAllocator {
    temp_counter: u32,
    label_counter: u32,
}

impl TempAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_temp(&mut self) -> String {
        self.temp_counter += 1;
        format!("t{}", self.temp_counter)
    }

    pub fn new_label(&mut self) -> String {
        self.label_counter += 1;
        format!("L{}", self.label_counter)
    }

    pub fn reset(&mut self) {
        self.temp_counter = 0;
        self.label_counter = 0;
    }
}
