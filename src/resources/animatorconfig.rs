//! Animator tuning resource.
//!
//! Holds the art-tunable constants of the animator: smoothing rates, blink
//! timing, and gaze gains. Values load from an INI file; anything missing or
//! out of range keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [blend]
//! limb = 0.85
//! head = 0.9
//! root = 0.95
//!
//! [blink]
//! min_delay = 2.0
//! max_delay = 6.0
//! close_decay = 0.5
//! open_decay = 0.8
//! floor = 0.08
//! reopen_threshold = 0.15
//! seed = 42
//!
//! [gaze]
//! smoothing = 0.08
//! head_yaw = 0.5
//! head_roll = 0.1
//! pupil_x = 0.04
//! pupil_y = 0.03
//! pupil_depth = 0.01
//!
//! [time]
//! time_scale = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::blendrate::BlendGroup;

const DEFAULT_LIMB_DECAY: f32 = 0.85;
const DEFAULT_HEAD_DECAY: f32 = 0.9;
const DEFAULT_ROOT_DECAY: f32 = 0.95;
const DEFAULT_BLINK_MIN_DELAY: f32 = 2.0;
const DEFAULT_BLINK_MAX_DELAY: f32 = 6.0;
const DEFAULT_BLINK_CLOSE_DECAY: f32 = 0.5;
const DEFAULT_BLINK_OPEN_DECAY: f32 = 0.8;
const DEFAULT_BLINK_FLOOR: f32 = 0.08;
const DEFAULT_BLINK_REOPEN_THRESHOLD: f32 = 0.15;
const DEFAULT_GAZE_SMOOTHING: f32 = 0.08;
const DEFAULT_HEAD_YAW_GAIN: f32 = 0.5;
const DEFAULT_HEAD_ROLL_GAIN: f32 = 0.1;
const DEFAULT_PUPIL_X_GAIN: f32 = 0.04;
const DEFAULT_PUPIL_Y_GAIN: f32 = 0.03;
const DEFAULT_PUPIL_DEPTH_GAIN: f32 = 0.01;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./animator.ini";

/// Animator tuning resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct AnimatorConfig {
    /// Decay base for arms, paws, legs, feet, tail, ears, pupils and props.
    pub limb_decay: f32,
    /// Decay base for torso and head.
    pub head_decay: f32,
    /// Decay base for the whole-body root offset.
    pub root_decay: f32,
    /// Shortest wait between blinks, in seconds.
    pub blink_min_delay: f32,
    /// Longest wait between blinks, in seconds.
    pub blink_max_delay: f32,
    /// Decay base while the eyelid closes.
    pub blink_close_decay: f32,
    /// Decay base while the eyelid reopens.
    pub blink_open_decay: f32,
    /// Openness the closing eyelid heads towards.
    pub blink_floor: f32,
    /// Openness under which the eyelid starts reopening.
    pub blink_reopen_threshold: f32,
    /// Seed for the blink delay generator. `None` seeds from entropy.
    pub blink_seed: Option<u64>,
    /// Per-tick pointer smoothing factor.
    pub gaze_smoothing: f32,
    pub head_yaw_gain: f32,
    pub head_roll_gain: f32,
    pub pupil_x_gain: f32,
    pub pupil_y_gain: f32,
    pub pupil_depth_gain: f32,
    /// Multiplier applied to host deltas by [`crate::animator::Animator::step`].
    pub time_scale: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimatorConfig {
    pub fn new() -> Self {
        Self {
            limb_decay: DEFAULT_LIMB_DECAY,
            head_decay: DEFAULT_HEAD_DECAY,
            root_decay: DEFAULT_ROOT_DECAY,
            blink_min_delay: DEFAULT_BLINK_MIN_DELAY,
            blink_max_delay: DEFAULT_BLINK_MAX_DELAY,
            blink_close_decay: DEFAULT_BLINK_CLOSE_DECAY,
            blink_open_decay: DEFAULT_BLINK_OPEN_DECAY,
            blink_floor: DEFAULT_BLINK_FLOOR,
            blink_reopen_threshold: DEFAULT_BLINK_REOPEN_THRESHOLD,
            blink_seed: None,
            gaze_smoothing: DEFAULT_GAZE_SMOOTHING,
            head_yaw_gain: DEFAULT_HEAD_YAW_GAIN,
            head_roll_gain: DEFAULT_HEAD_ROLL_GAIN,
            pupil_x_gain: DEFAULT_PUPIL_X_GAIN,
            pupil_y_gain: DEFAULT_PUPIL_Y_GAIN,
            pupil_depth_gain: DEFAULT_PUPIL_DEPTH_GAIN,
            time_scale: DEFAULT_TIME_SCALE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a configuration with a custom file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.blink_seed = Some(seed);
        self
    }

    /// Decay base for a blend group.
    pub fn decay_for(&self, group: BlendGroup) -> f32 {
        match group {
            BlendGroup::Limb => self.limb_decay,
            BlendGroup::Head => self.head_decay,
            BlendGroup::Root => self.root_decay,
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Returns an error if the
    /// file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let float = |section: &str, key: &str| -> Option<f32> {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [blend] section
        if let Some(v) = float("blend", "limb") {
            self.limb_decay = v;
        }
        if let Some(v) = float("blend", "head") {
            self.head_decay = v;
        }
        if let Some(v) = float("blend", "root") {
            self.root_decay = v;
        }

        // [blink] section
        if let Some(v) = float("blink", "min_delay") {
            self.blink_min_delay = v;
        }
        if let Some(v) = float("blink", "max_delay") {
            self.blink_max_delay = v;
        }
        if let Some(v) = float("blink", "close_decay") {
            self.blink_close_decay = v;
        }
        if let Some(v) = float("blink", "open_decay") {
            self.blink_open_decay = v;
        }
        if let Some(v) = float("blink", "floor") {
            self.blink_floor = v;
        }
        if let Some(v) = float("blink", "reopen_threshold") {
            self.blink_reopen_threshold = v;
        }
        if let Some(seed) = config.getuint("blink", "seed").ok().flatten() {
            self.blink_seed = Some(seed);
        }

        // [gaze] section
        if let Some(v) = float("gaze", "smoothing") {
            self.gaze_smoothing = v;
        }
        if let Some(v) = float("gaze", "head_yaw") {
            self.head_yaw_gain = v;
        }
        if let Some(v) = float("gaze", "head_roll") {
            self.head_roll_gain = v;
        }
        if let Some(v) = float("gaze", "pupil_x") {
            self.pupil_x_gain = v;
        }
        if let Some(v) = float("gaze", "pupil_y") {
            self.pupil_y_gain = v;
        }
        if let Some(v) = float("gaze", "pupil_depth") {
            self.pupil_depth_gain = v;
        }

        // [time] section
        if let Some(v) = float("time", "time_scale") {
            self.time_scale = v;
        }

        self.sanitize();

        info!(
            "Loaded animator config: blend limb={} head={} root={}, blink {}..{}s, gaze smoothing={}",
            self.limb_decay,
            self.head_decay,
            self.root_decay,
            self.blink_min_delay,
            self.blink_max_delay,
            self.gaze_smoothing
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [blend] section
        config.set("blend", "limb", Some(self.limb_decay.to_string()));
        config.set("blend", "head", Some(self.head_decay.to_string()));
        config.set("blend", "root", Some(self.root_decay.to_string()));

        // [blink] section
        config.set("blink", "min_delay", Some(self.blink_min_delay.to_string()));
        config.set("blink", "max_delay", Some(self.blink_max_delay.to_string()));
        config.set("blink", "close_decay", Some(self.blink_close_decay.to_string()));
        config.set("blink", "open_decay", Some(self.blink_open_decay.to_string()));
        config.set("blink", "floor", Some(self.blink_floor.to_string()));
        config.set(
            "blink",
            "reopen_threshold",
            Some(self.blink_reopen_threshold.to_string()),
        );
        if let Some(seed) = self.blink_seed {
            config.set("blink", "seed", Some(seed.to_string()));
        }

        // [gaze] section
        config.set("gaze", "smoothing", Some(self.gaze_smoothing.to_string()));
        config.set("gaze", "head_yaw", Some(self.head_yaw_gain.to_string()));
        config.set("gaze", "head_roll", Some(self.head_roll_gain.to_string()));
        config.set("gaze", "pupil_x", Some(self.pupil_x_gain.to_string()));
        config.set("gaze", "pupil_y", Some(self.pupil_y_gain.to_string()));
        config.set("gaze", "pupil_depth", Some(self.pupil_depth_gain.to_string()));

        // [time] section
        config.set("time", "time_scale", Some(self.time_scale.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved animator config to {:?}", self.config_path);

        Ok(())
    }

    /// Replace out-of-range values with their defaults.
    ///
    /// Decay bases must lie in `(0, 1)`, the blink delay range must be
    /// ordered and non-negative, the blink floor must sit below the reopen
    /// threshold, gaze smoothing must lie in `(0, 1]`, and gaze gains must be
    /// finite.
    pub fn sanitize(&mut self) {
        fn decay(name: &str, value: &mut f32, default: f32) {
            if !(value.is_finite() && *value > 0.0 && *value < 1.0) {
                warn!("Invalid {} decay {}, using {}", name, value, default);
                *value = default;
            }
        }
        decay("limb", &mut self.limb_decay, DEFAULT_LIMB_DECAY);
        decay("head", &mut self.head_decay, DEFAULT_HEAD_DECAY);
        decay("root", &mut self.root_decay, DEFAULT_ROOT_DECAY);
        decay("blink close", &mut self.blink_close_decay, DEFAULT_BLINK_CLOSE_DECAY);
        decay("blink open", &mut self.blink_open_decay, DEFAULT_BLINK_OPEN_DECAY);

        let delays_ok = self.blink_min_delay.is_finite()
            && self.blink_max_delay.is_finite()
            && self.blink_min_delay >= 0.0
            && self.blink_min_delay <= self.blink_max_delay;
        if !delays_ok {
            warn!(
                "Invalid blink delay range {}..{}, using {}..{}",
                self.blink_min_delay,
                self.blink_max_delay,
                DEFAULT_BLINK_MIN_DELAY,
                DEFAULT_BLINK_MAX_DELAY
            );
            self.blink_min_delay = DEFAULT_BLINK_MIN_DELAY;
            self.blink_max_delay = DEFAULT_BLINK_MAX_DELAY;
        }

        let lid_ok = (0.0..1.0).contains(&self.blink_floor)
            && self.blink_reopen_threshold > self.blink_floor
            && self.blink_reopen_threshold <= 1.0;
        if !lid_ok {
            warn!(
                "Invalid blink floor {} / reopen threshold {}, using {} / {}",
                self.blink_floor,
                self.blink_reopen_threshold,
                DEFAULT_BLINK_FLOOR,
                DEFAULT_BLINK_REOPEN_THRESHOLD
            );
            self.blink_floor = DEFAULT_BLINK_FLOOR;
            self.blink_reopen_threshold = DEFAULT_BLINK_REOPEN_THRESHOLD;
        }

        if !(self.gaze_smoothing.is_finite()
            && self.gaze_smoothing > 0.0
            && self.gaze_smoothing <= 1.0)
        {
            warn!(
                "Invalid gaze smoothing {}, using {}",
                self.gaze_smoothing, DEFAULT_GAZE_SMOOTHING
            );
            self.gaze_smoothing = DEFAULT_GAZE_SMOOTHING;
        }

        fn gain(name: &str, value: &mut f32, default: f32) {
            if !value.is_finite() {
                warn!("Invalid {} gain {}, using {}", name, value, default);
                *value = default;
            }
        }
        gain("head yaw", &mut self.head_yaw_gain, DEFAULT_HEAD_YAW_GAIN);
        gain("head roll", &mut self.head_roll_gain, DEFAULT_HEAD_ROLL_GAIN);
        gain("pupil x", &mut self.pupil_x_gain, DEFAULT_PUPIL_X_GAIN);
        gain("pupil y", &mut self.pupil_y_gain, DEFAULT_PUPIL_Y_GAIN);
        gain("pupil depth", &mut self.pupil_depth_gain, DEFAULT_PUPIL_DEPTH_GAIN);

        if !(self.time_scale.is_finite() && self.time_scale >= 0.0) {
            warn!(
                "Invalid time scale {}, using {}",
                self.time_scale, DEFAULT_TIME_SCALE
            );
            self.time_scale = DEFAULT_TIME_SCALE;
        }
    }
}
