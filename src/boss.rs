/// A level's adversary. Purely cosmetic: the name and art are shown while the
/// level runs and on the defeat banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boss {
    pub name: &'static str,
    art: &'static str,
}

impl Boss {
    /// Boss for a 1-based level number.
    pub fn for_level(level: u32) -> Option<&'static Boss> {
        let idx = usize::try_from(level).ok()?.checked_sub(1)?;
        BOSSES.get(idx)
    }

    pub fn art(&self) -> &'static str {
        self.art.trim_matches('\n')
    }

    pub fn art_lines(&self) -> impl Iterator<Item = &'static str> {
        self.art().lines()
    }
}

pub const BOSS_COUNT: usize = 25;

pub static BOSSES: [Boss; BOSS_COUNT] = [
    Boss {
        name: "Slime Blob",
        art: r#"
       .--.
      / oo \
     | |  | |
      \ -- /
       `--'
"#,
    },
    Boss {
        name: "Googly Eye",
        art: r#"
      .-----.
     / O   O \
    |   <   |
     \  -  /
      `-----'
"#,
    },
    Boss {
        name: "Boss Bot",
        art: r#"
     .------.
     |[][][]|
     |[][][]|
     '------'
      |_|--|_|
"#,
    },
    Boss {
        name: "Spike",
        art: r#"
        /\
       /  \
      /----\
     /      \
    /________\
"#,
    },
    Boss {
        name: "Ghostly",
        art: r#"
      .-.
     (o o)
     | O \
      \   \
       `~~~'
"#,
    },
    Boss {
        name: "Angry Cloud",
        art: r#"
      .--.
     ( `-' )
    ( (   ) )
     `--'--'
"#,
    },
    Boss {
        name: "Skull",
        art: r#"
      .------.
     /  _  _  \
    |  (o)(o)  |
    |   /\   |
    |  `--'  |
     \------/
"#,
    },
    Boss {
        name: "Spider",
        art: r#"
      /\  /\
     /  \/  \
    |  o  o  |
     \  --  /
      `----'
"#,
    },
    Boss {
        name: "Snake",
        art: r#"
        .--.
       /o o \
       \  --<
        `---'
       /  /
      /  /
     /  /
    /  /
    `.'
"#,
    },
    Boss {
        name: "Bat",
        art: r#"
    \    /\    /
     \  /  \  /
      \/o_o\/
       `---'
"#,
    },
    Boss {
        name: "Tentacle Terror",
        art: r#"
        _
       / \
      / _ \
     / / \ \
    | | O | |
     \ \_/ /
      `---'
"#,
    },
    Boss {
        name: "Rock Golem",
        art: r#"
      .-----.
     / O   O \
    |  `---'  |
    | | | | | |
     `-----'
"#,
    },
    Boss {
        name: "Evil Tree",
        art: r#"
       /\
      /  \
     / o o\
    |  /\  |
    | |  | |
     `----'
"#,
    },
    Boss {
        name: "UFO",
        art: r#"
       .---.
      /____\
     ( o o o)
      `---'
"#,
    },
    Boss {
        name: "Dragon Head",
        art: r#"
       /\_/\
      / o o \
     (  _  )
      `---'
"#,
    },
    Boss {
        name: "Cyber Eye",
        art: r#"
      .------.
     /  .--.  \
    |  | o  |  |
     \  `--'  /
      `------'
"#,
    },
    Boss {
        name: "Grumpy Cat",
        art: r#"
    /\_/\
   ( o.o )
    > ^ <
"#,
    },
    Boss {
        name: "Mech Jaw",
        art: r#"
     .------.
     |/\/\/\|
     | o  o |
     |______|
"#,
    },
    Boss {
        name: "Cursed Mask",
        art: r#"
      .------.
     /  o  o  \
    |    ^    |
    |  `---'  |
     \------/
"#,
    },
    Boss {
        name: "Volcano",
        art: r#"
       /\
      /  \
     /____\
    /`----'\
   /________\
"#,
    },
    Boss {
        name: "Deep Sea Horror",
        art: r#"
        .---.
       / o o \
      |   J   |
       \ --- /
      /  |  \
     /   |   \
"#,
    },
    Boss {
        name: "Crystal Fiend",
        art: r#"
       /\
      /  \
     <    >
      \  /
       \/
"#,
    },
    Boss {
        name: "Void Monster",
        art: r#"
       .....
      .o.o.o.
     .o.o.o.o.
      .o.o.o.
       .....
"#,
    },
    Boss {
        name: "Armored Knight",
        art: r#"
      .------.
     |  _ _  |
     | |o|o| |
     |  _|_  |
     `------'
"#,
    },
    Boss {
        name: "The Word Master",
        art: r#"
      .------.
     / A B C  \
    |  D E F   |
     \ G H I /
      `------'
"#,
    },
];
