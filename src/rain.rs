//! Matrix-rain column model.
//!
//! The draw loop lives in `wasm::rain`; this module holds the per-variant
//! tuning and the cursor stepping rule so the reset behaviour can be tested
//! off-browser with an injected random source.

/// Trail colour shared by both variants.
pub const GLYPH_COLOR: &str = "#00ff41";

/// A column survives a past-the-bottom tick with this probability.
pub const RESET_THRESHOLD: f64 = 0.975;

/// How a column cursor restarts after falling past the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    /// Back to the top edge.
    Top,
    /// To a random negative offset, desynchronizing restarts.
    Scatter,
}

#[derive(Debug, Clone)]
pub struct RainConfig {
    pub glyph_size: f64,
    pub fade_alpha: f64,
    pub alphabet: &'static str,
    pub reset: ResetMode,
    /// Minimum wall-clock spacing between painted frames.
    pub frame_interval_ms: f64,
}

impl RainConfig {
    pub fn desktop() -> Self {
        Self {
            glyph_size: 10.0,
            fade_alpha: 0.04,
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789@#$%^&*()*&^%+-/~{[|`]}",
            reset: ResetMode::Top,
            frame_interval_ms: 35.0,
        }
    }

    /// Mobile trades glyph density and frame rate for battery life.
    pub fn mobile() -> Self {
        Self {
            glyph_size: 12.0,
            fade_alpha: 0.08,
            alphabet: "ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789@#$%^&*",
            reset: ResetMode::Scatter,
            frame_interval_ms: 1000.0 / 20.0,
        }
    }

    pub fn column_count(&self, canvas_width: f64) -> usize {
        (canvas_width / self.glyph_size).floor().max(0.0) as usize
    }

    /// Starting cursor for a fresh column. `u` is uniform in [0, 1).
    pub fn initial_cursor(&self, u: f64) -> f64 {
        match self.reset {
            ResetMode::Top => 1.0,
            ResetMode::Scatter => u * -100.0,
        }
    }

    pub fn fade_style(&self) -> String {
        format!("rgba(0, 0, 0, {})", self.fade_alpha)
    }

    pub fn font(&self) -> String {
        format!("{}px monospace", self.glyph_size)
    }
}

/// Advance one column cursor by a tick.
///
/// Once the cursor's pixel position is past the canvas bottom it restarts
/// with probability `1 - RESET_THRESHOLD` per tick; the cursor always moves
/// down one row afterwards. Columns never read each other.
pub fn advance_cursor(
    cursor: f64,
    canvas_height: f64,
    config: &RainConfig,
    mut rng: impl FnMut() -> f64,
) -> f64 {
    let mut next = cursor;
    if cursor * config.glyph_size > canvas_height && rng() > RESET_THRESHOLD {
        next = match config.reset {
            ResetMode::Top => 0.0,
            ResetMode::Scatter => rng() * -100.0,
        };
    }
    next + 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic uniform source, good enough for rate checks.
    fn lcg(seed: u64) -> impl FnMut() -> f64 {
        let mut state = seed.max(1);
        move || {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 11) as f64 / (1u64 << 53) as f64
        }
    }

    #[test]
    fn cursor_above_bottom_never_resets() {
        let config = RainConfig::desktop();
        let mut rng = lcg(7);
        let mut cursor = 1.0;
        for _ in 0..50 {
            let next = advance_cursor(cursor, 1000.0, &config, &mut rng);
            assert_eq!(next, cursor + 1.0);
            cursor = next;
        }
    }

    #[test]
    fn reset_rate_matches_configured_probability() {
        let config = RainConfig::desktop();
        let mut rng = lcg(42);
        let trials = 100_000;
        let mut resets = 0;
        for _ in 0..trials {
            // Cursor pinned far past the bottom so every tick may reset.
            let next = advance_cursor(500.0, 100.0, &config, &mut rng);
            if next < 500.0 {
                resets += 1;
            }
        }
        let rate = resets as f64 / trials as f64;
        assert!(
            (0.015..=0.035).contains(&rate),
            "reset rate {rate} out of expected band"
        );
    }

    #[test]
    fn scatter_reset_lands_at_or_above_top() {
        let config = RainConfig::mobile();
        // First draw forces the reset branch, second picks the offset.
        let mut draws = [0.99, 0.5].into_iter();
        let next = advance_cursor(500.0, 100.0, &config, move || draws.next().unwrap());
        assert!(next <= 0.0, "scatter reset should desynchronize: {next}");
    }

    #[test]
    fn top_reset_lands_on_first_row() {
        let config = RainConfig::desktop();
        let mut draws = [0.99].into_iter();
        let next = advance_cursor(500.0, 100.0, &config, move || draws.next().unwrap());
        assert_eq!(next, 1.0);
    }

    #[test]
    fn column_counts_follow_glyph_size() {
        assert_eq!(RainConfig::desktop().column_count(1000.0), 100);
        assert_eq!(RainConfig::mobile().column_count(390.0), 32);
        assert_eq!(RainConfig::desktop().column_count(0.0), 0);
    }

    #[test]
    fn mobile_columns_start_desynchronized() {
        let config = RainConfig::mobile();
        assert!(config.initial_cursor(0.3) < 0.0);
        assert_eq!(config.initial_cursor(0.0), 0.0);
        assert_eq!(RainConfig::desktop().initial_cursor(0.3), 1.0);
    }
}
