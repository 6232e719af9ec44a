use std::time::Duration;

// Filter and mapping defaults match the site's reference tuning: raw
// stiffness/damping constants are divided by 1000 before use, so 400/50
// become per-frame fractions of 0.4 and 0.05.
pub const DEFAULT_BASE_VELOCITY_PX_S: f64 = 100.0;
pub const DEFAULT_STIFFNESS: f64 = 400.0;
pub const DEFAULT_DAMPING: f64 = 50.0;

// Clamped linear map from |smoothed scroll velocity| (px/s) to the
// boost factor applied on top of the base step.
pub const DEFAULT_VELOCITY_INPUT: [f64; 2] = [0.0, 1000.0];
pub const DEFAULT_VELOCITY_OUTPUT: [f64; 2] = [0.0, 5.0];

/// Tuning for one marquee engine. All rows of an engine share the filter;
/// each row only differs in base-velocity sign and its own offset.
#[derive(Clone, Debug)]
pub struct MarqueeParams {
    /// Steady-state scroll speed in px/s absent any user scrolling.
    pub base_velocity_px_s: f64,
    /// Raw spring stiffness; divided by 1000 into a per-frame fraction.
    pub stiffness: f64,
    /// Raw damping; divided by 1000 into a per-frame attenuation.
    pub damping: f64,
    /// Input range of the scroll-speed -> boost map (px/s).
    pub velocity_input: [f64; 2],
    /// Output range of the scroll-speed -> boost map (unitless factor).
    pub velocity_output: [f64; 2],
}

impl Default for MarqueeParams {
    fn default() -> Self {
        Self {
            base_velocity_px_s: DEFAULT_BASE_VELOCITY_PX_S,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            velocity_input: DEFAULT_VELOCITY_INPUT,
            velocity_output: DEFAULT_VELOCITY_OUTPUT,
        }
    }
}

/// Per-row animation state. One engine instance normally drives a single
/// row, but the state is kept per-row so stacked rows (alternating
/// direction) share one filter.
#[derive(Clone, Debug)]
pub struct RowState {
    /// Measured width of one rendered copy of the item sequence.
    /// 0 until the host has measured; the wrap step is skipped while 0.
    pub copy_width_px: f64,
    /// How many identical copies the host has tiled for this row.
    pub copies: usize,
    /// Current horizontal translation, wrapped into one copy width.
    pub offset_px: f64,
    /// Travel direction, +1 or -1; forced by the velocity factor sign.
    pub direction: f64,
    /// Base-velocity sign for this row (-1 for odd rows so stacked rows
    /// run opposite ways).
    base_sign: f64,
}

/// Velocity-reactive infinite marquee integrator.
///
/// The engine owns no DOM: the host samples the page scroll position into
/// it via [`observe_scroll`](Self::observe_scroll), advances it once per
/// animation frame via [`tick`](Self::tick), and reads back per-row
/// offsets to apply as transforms.
pub struct MarqueeEngine {
    pub params: MarqueeParams,
    rows: Vec<RowState>,
    scroll_velocity: f64,
    smooth_velocity: f64,
    velocity_factor: f64,
    last_scroll_y: f64,
    last_sample_ms: f64,
}

impl MarqueeEngine {
    pub fn new(params: MarqueeParams, row_count: usize) -> Self {
        let rows = (0..row_count)
            .map(|i| RowState {
                copy_width_px: 0.0,
                copies: 0,
                offset_px: 0.0,
                direction: 1.0,
                base_sign: if i % 2 != 0 { -1.0 } else { 1.0 },
            })
            .collect();
        Self {
            params,
            rows,
            scroll_velocity: 0.0,
            smooth_velocity: 0.0,
            velocity_factor: 0.0,
            last_scroll_y: 0.0,
            last_sample_ms: 0.0,
        }
    }

    pub fn row_offset(&self, row: usize) -> f64 {
        self.rows.get(row).map(|r| r.offset_px).unwrap_or(0.0)
    }

    pub fn velocity_factor(&self) -> f64 {
        self.velocity_factor
    }

    pub fn smooth_velocity(&self) -> f64 {
        self.smooth_velocity
    }

    /// Store the layout measured by the host for one row. Offsets are kept
    /// so a resize does not visibly jump the strip; the next wrap pulls the
    /// offset back into the new copy width.
    pub fn set_copy_layout(&mut self, row: usize, copy_width_px: f64, copies: usize) {
        if let Some(r) = self.rows.get_mut(row) {
            r.copy_width_px = copy_width_px;
            r.copies = copies;
        }
    }

    /// Feed one page-scroll sample. `now_ms` must come from the same
    /// monotonic clock across samples (`performance.now()` on the web).
    pub fn observe_scroll(&mut self, scroll_y: f64, now_ms: f64) {
        let dt_ms = now_ms - self.last_sample_ms;
        if dt_ms > 0.0 {
            let dy = scroll_y - self.last_scroll_y;
            self.scroll_velocity = dy / dt_ms * 1000.0;
        }
        self.last_scroll_y = scroll_y;
        self.last_sample_ms = now_ms;
    }

    /// Advance every row by one frame.
    pub fn tick(&mut self, dt: Duration) {
        let dt_s = dt.as_secs_f64();

        // Critically-damped low-pass toward the raw sampled velocity.
        let stiffness = (self.params.stiffness / 1000.0).clamp(0.0, 1.0);
        let damping = (self.params.damping / 1000.0).clamp(0.0, 1.0);
        self.smooth_velocity += (self.scroll_velocity - self.smooth_velocity) * stiffness;
        self.smooth_velocity *= 1.0 - damping;

        self.velocity_factor = map_velocity_factor(
            self.smooth_velocity,
            self.params.velocity_input,
            self.params.velocity_output,
        );

        let base_velocity = self.params.base_velocity_px_s;
        let factor = self.velocity_factor;
        for row in &mut self.rows {
            // Base step uses the direction from the previous frame; the
            // boost below uses the freshly forced direction. Reference
            // behavior, kept as-is (including the stall at factor == 0).
            let base_step = row.direction * row.base_sign * base_velocity * dt_s;

            if factor < 0.0 {
                row.direction = -1.0;
            } else if factor > 0.0 {
                row.direction = 1.0;
            }

            let step = base_step + row.direction * base_step * factor;
            row.offset_px += step;

            if row.copy_width_px > 0.0 {
                row.offset_px = wrap_offset(row.offset_px, row.copy_width_px);
            }
        }
    }
}

/// Signed, clamped linear map from smoothed scroll speed to boost factor.
/// A degenerate (zero or negative width) input range maps to 0.
pub fn map_velocity_factor(smooth_velocity: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let input_range = input[1] - input[0];
    if input_range <= 0.0 {
        return 0.0;
    }
    let normalized = ((smooth_velocity.abs() - input[0]) / input_range).clamp(0.0, 1.0);
    let factor = output[0] + normalized * (output[1] - output[0]);
    if smooth_velocity < 0.0 {
        -factor
    } else {
        factor
    }
}

/// Wrap an offset into one copy width using true modulo, so negative
/// offsets and multiple wraps land on the equivalent in-range position.
/// Wrapping happens exactly at a copy boundary, which is seamless because
/// copies are identical. Result lies in `[-copy_width, 0)`; idempotent.
pub fn wrap_offset(offset_px: f64, copy_width_px: f64) -> f64 {
    let min = -copy_width_px;
    (offset_px - min).rem_euclid(copy_width_px) + min
}
