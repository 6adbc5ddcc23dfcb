//! Game state and core simulation types
//!
//! `GameState` is the single owner of everything the tick mutates.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Running,
    /// Run ended; state is frozen until restart
    GameOver,
}

/// Horizontal drive level, set from held left/right input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Drive {
    Left,
    #[default]
    Stop,
    Right,
}

impl Drive {
    /// Per-tick x delta
    pub fn speed(self) -> i32 {
        match self {
            Drive::Left => -DRIVE_SPEED,
            Drive::Stop => 0,
            Drive::Right => DRIVE_SPEED,
        }
    }

    pub fn from_speed(speed: i32) -> Self {
        match speed.signum() {
            -1 => Drive::Left,
            1 => Drive::Right,
            _ => Drive::Stop,
        }
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: IVec2,
    pub size: IVec2,
    /// Vertical velocity (negative is up)
    pub vel_y: i32,
    pub airborne: bool,
    pub drive: Drive,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: IVec2::new(PLAYER_START_X, GROUND_Y),
            size: IVec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel_y: 0,
            airborne: false,
            drive: Drive::Stop,
        }
    }
}

impl Player {
    /// Start a jump. Ignored while already airborne.
    pub fn jump(&mut self) {
        if !self.airborne {
            self.airborne = true;
            self.vel_y = JUMP_IMPULSE;
        }
    }

    pub fn set_drive(&mut self, drive: Drive) {
        self.drive = drive;
    }

    /// Integrate one tick of vertical and horizontal motion
    pub fn update(&mut self) {
        if self.airborne {
            self.pos.y += self.vel_y;
            self.vel_y += GRAVITY;

            // Land exactly on the ground line
            if self.pos.y >= GROUND_Y {
                self.pos.y = GROUND_Y;
                self.airborne = false;
                self.vel_y = 0;
            }
        }

        self.pos.x = (self.pos.x + self.drive.speed()).clamp(0, PLAYER_MAX_X);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Code and title shown on labelled obstacles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    pub code: &'static str,
    pub name: &'static str,
}

/// Course obstacles, in unlock order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Cs101,
    Cs201,
    Math105,
    Stats211,
    CompSci203,
    Math202,
    Stats302,
    Math206,
    CompSci304,
}

impl Course {
    pub const ALL: [Course; 9] = [
        Course::Cs101,
        Course::Cs201,
        Course::Math105,
        Course::Stats211,
        Course::CompSci203,
        Course::Math202,
        Course::Stats302,
        Course::Math206,
        Course::CompSci304,
    ];

    pub fn label(self) -> Label {
        let (code, name) = match self {
            Course::Cs101 => ("CS101", "Python"),
            Course::Cs201 => ("CS201", "Java"),
            Course::Math105 => ("MATH 105", "Calculus"),
            Course::Stats211 => ("STATS 211", "Stochastic Processes"),
            Course::CompSci203 => ("COMPSCI 203", "Discrete Math"),
            Course::Math202 => ("MATH 202", "Linear Algebra"),
            Course::Stats302 => ("STATS 302", "Machine Learning"),
            Course::Math206 => ("MATH 206", "Probability & Stats"),
            Course::CompSci304 => ("COMPSCI 304", "Speech Recognition"),
        };
        Label { code, name }
    }
}

/// Ground obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    SmallCactus,
    LargeCactus,
    SyntaxError,
    Course(Course),
}

impl ObstacleKind {
    /// Fixed hitbox size for this kind
    pub fn size(self) -> IVec2 {
        match self {
            ObstacleKind::SmallCactus => IVec2::new(30, 40),
            ObstacleKind::LargeCactus => IVec2::new(40, 60),
            ObstacleKind::SyntaxError => IVec2::new(70, 50),
            ObstacleKind::Course(_) => IVec2::new(60, 70),
        }
    }

    /// Cacti are unlabelled
    pub fn label(self) -> Option<Label> {
        match self {
            ObstacleKind::SmallCactus | ObstacleKind::LargeCactus => None,
            ObstacleKind::SyntaxError => Some(Label {
                code: "ERROR",
                name: "Syntax Error!",
            }),
            ObstacleKind::Course(course) => Some(course.label()),
        }
    }
}

/// Display palette for ground obstacles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleColor {
    DarkGreen,
    LightGreen,
    DarkBlue,
}

impl ObstacleColor {
    pub const PALETTE: [ObstacleColor; 3] = [
        ObstacleColor::DarkGreen,
        ObstacleColor::LightGreen,
        ObstacleColor::DarkBlue,
    ];

    pub fn rgb(self) -> [u8; 3] {
        match self {
            ObstacleColor::DarkGreen => [34, 139, 34],
            ObstacleColor::LightGreen => [144, 238, 144],
            ObstacleColor::DarkBlue => [60, 100, 180],
        }
    }
}

/// An obstacle scrolling left along the ground
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundObstacle {
    pub kind: ObstacleKind,
    pub pos: IVec2,
    pub size: IVec2,
    pub speed: i32,
    /// Label rotation in degrees (cosmetic)
    pub rotation: u16,
    pub color: ObstacleColor,
}

impl GroundObstacle {
    /// Create an obstacle at `x`, standing on the ground line
    pub fn new(kind: ObstacleKind, x: i32, color: ObstacleColor) -> Self {
        let size = kind.size();
        Self {
            kind,
            pos: IVec2::new(x, GROUND_LEVEL - size.y),
            size,
            speed: GROUND_OBSTACLE_SPEED,
            rotation: 0,
            color,
        }
    }

    pub fn advance(&mut self) {
        self.pos.x -= self.speed;
        self.rotation = (self.rotation + ROTATION_STEP) % 360;
    }

    /// Right edge has scrolled past the left border
    pub fn is_offscreen(&self) -> bool {
        self.pos.x + self.size.x < 0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// An obstacle dropping from the top of the playfield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingObstacle {
    pub pos: IVec2,
    pub size: IVec2,
    pub speed: i32,
}

impl FallingObstacle {
    pub fn new(x: i32) -> Self {
        Self {
            pos: IVec2::new(x, FALLING_START_Y),
            size: IVec2::splat(FALLING_SIZE),
            speed: FALLING_SPEED,
        }
    }

    pub fn advance(&mut self) {
        self.pos.y += self.speed;
    }

    /// Top edge has dropped below the playfield
    pub fn is_offscreen(&self) -> bool {
        self.pos.y > PLAYFIELD_HEIGHT
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    /// Spawn randomness
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub score: u32,
    /// Ticks since the last ground spawn
    pub ground_timer: u32,
    /// Ticks since the last falling spawn
    pub falling_timer: u32,
    /// Simulation tick counter (not reset on restart)
    pub time_ticks: u64,
    pub player: Player,
    /// Live ground obstacles, oldest first
    pub obstacles: Vec<GroundObstacle>,
    /// Live falling obstacles, oldest first
    pub falling: Vec<FallingObstacle>,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self::with_rng(Pcg32::seed_from_u64(seed));
        state.seed = seed;
        state
    }

    /// Create a new game state around an already-built `Pcg32`.
    ///
    /// Other generators plug in through the `Rng`-generic helpers in
    /// `spawn` (`pick_kind`, `pick_color`), not through the state.
    pub fn with_rng(rng: Pcg32) -> Self {
        Self {
            seed: 0,
            rng,
            phase: GamePhase::Running,
            score: 0,
            ground_timer: 0,
            falling_timer: 0,
            time_ticks: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            falling: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Jump, unless the run has ended
    pub fn jump(&mut self) {
        if !self.is_game_over() {
            self.player.jump();
        }
    }

    /// Reset to a fresh run. The RNG stream carries on.
    pub fn restart(&mut self) {
        self.player = Player::default();
        self.obstacles.clear();
        self.falling.clear();
        self.score = 0;
        self.phase = GamePhase::Running;
        self.ground_timer = 0;
        self.falling_timer = 0;
    }
}
