//! Read-only render snapshots
//!
//! The renderer only sees positions, sizes and a visual tag per entity. It
//! never holds references into live simulation state.

use serde::{Deserialize, Serialize};

use super::parallax::LayerKind;
use super::player::JumpState;
use super::rect::Rect;
use super::state::{Collectible, GameState, PropKind};

/// What to draw for an entity (resolved to sprites by the renderer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualTag {
    Player(JumpState),
    Hazard,
    Coin { frame: u32 },
    Prop(PropKind),
    Platform,
}

/// One drawable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub visual: VisualTag,
}

impl EntityView {
    fn new(rect: &Rect, visual: VisualTag) -> Self {
        Self {
            x: rect.pos.x,
            y: rect.pos.y,
            width: rect.size.x,
            height: rect.size.y,
            visual,
        }
    }
}

/// One background layer, drawn at both `draw_x` positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerView {
    pub kind: LayerKind,
    pub draw_x: [f32; 2],
    pub width: f32,
}

/// Everything a renderer needs between ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub player: EntityView,
    pub hazard: EntityView,
    /// Fixed collectible first, then transients by id
    pub collectibles: Vec<EntityView>,
    pub props: Vec<EntityView>,
    pub platform: EntityView,
    /// Back to front
    pub layers: Vec<LayerView>,
    pub score: f64,
    pub display_score: u64,
    pub is_game_over: bool,
}

impl RenderState {
    pub fn capture(state: &GameState) -> Self {
        let coin = |c: &Collectible| {
            EntityView::new(&c.body, VisualTag::Coin { frame: c.frame })
        };

        Self {
            player: EntityView::new(&state.player.body, VisualTag::Player(state.player.jump_state)),
            hazard: EntityView::new(&state.hazard.body, VisualTag::Hazard),
            collectibles: std::iter::once(&state.fixed_collectible)
                .chain(state.transients.iter())
                .map(coin)
                .collect(),
            props: state
                .props
                .iter()
                .map(|p| EntityView::new(&p.body, VisualTag::Prop(p.kind)))
                .collect(),
            platform: EntityView::new(&state.platform, VisualTag::Platform),
            layers: state
                .layers
                .iter()
                .map(|l| LayerView {
                    kind: l.kind,
                    draw_x: l.draw_positions(),
                    width: l.width,
                })
                .collect(),
            score: state.session.score,
            display_score: state.session.display_score(),
            is_game_over: state.session.is_game_over,
        }
    }
}
