use std::time::Instant;

/// Milliseconds per pipeline stage, for the timings in the debug log.
pub struct Timer{
    start: Instant,
    last: Instant,
}

impl Timer{
    pub fn new() -> Self{
        let now = Instant::now();
        Self{ start: now, last: now }
    }

    /// Milliseconds since the last checkpoint.
    pub fn elapsed(&self) -> u128{
        self.last.elapsed().as_millis()
    }

    pub fn checkpoint(&mut self){
        self.last = Instant::now();
    }

    /// Logs the time spent on `stage` and starts timing the next one.
    pub fn lap(&mut self, stage: &str){
        log::debug!("{stage}: {:?}ms", self.elapsed());
        self.checkpoint();
    }

    pub fn total(&self) -> u128{
        self.start.elapsed().as_millis()
    }
}
