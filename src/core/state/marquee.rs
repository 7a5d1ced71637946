/// Horizontal scroll position of the skills strip.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeState {
    offset: f64,
    /// Cells advanced per tick.
    step: f64,
    /// Width of one strip cycle in cells.
    cycle: usize,
    paused_by_user: bool,
    hovered: bool,
    pause_on_hover: bool,
}

impl Default for MarqueeState {
    fn default() -> Self {
        Self {
            offset: 0.0,
            step: 0.0,
            cycle: 0,
            paused_by_user: false,
            hovered: false,
            pause_on_hover: true,
        }
    }
}

impl MarqueeState {
    /// `speed` is in cells per second, `tick_rate` in ticks per second.
    pub fn new(speed: f64, tick_rate: f64, cycle: usize, pause_on_hover: bool) -> Self {
        let step = if tick_rate > 0.0 && speed.is_finite() {
            (speed / tick_rate).max(0.0)
        } else {
            0.0
        };
        Self {
            step,
            cycle,
            pause_on_hover,
            ..Default::default()
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_by_user || (self.pause_on_hover && self.hovered)
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn cycle(&self) -> usize {
        self.cycle
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Move one tick forward, wrapping at the end of the cycle.
    pub fn advance(&mut self) {
        if self.is_paused() || self.cycle == 0 {
            return;
        }
        self.offset = (self.offset + self.step) % self.cycle as f64;
    }

    /// First visible cell of the strip.
    pub fn window_start(&self) -> usize {
        if self.cycle == 0 {
            return 0;
        }
        self.offset.floor() as usize % self.cycle
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused_by_user = !self.paused_by_user;
        self.paused_by_user
    }
}
