/// Static cat art between the score row and the bar.
pub struct CatSprite {
    pub art: &'static str,
    #[allow(dead_code)]
    pub width: usize,
    pub height: usize,
}

impl CatSprite {
    pub const fn new(art: &'static str, width: usize, height: usize) -> Self {
        Self { art, width, height }
    }
}

pub const SPRITE_CAT: CatSprite = CatSprite::new(
    r"      ╱╲___╱╲
     ╱  ●   ● ╲
    │    ▼▼    │
    │  ╰────╯  │╲
     ╲________╱ │
     ╱│      │╲ │
    ╱ │ ████ │ ╲│
      │ ████ │ ╱
     ╱╲╱    ╲╱╲
    ╰─╯      ╰─╯",
    16,
    10,
);
