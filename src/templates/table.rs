//! Bitmaps of the known templates.
//!
//! `X` - alive, `O` - dead, `.` - left untouched when stamping.

use super::Template;

pub(super) static ACORN: Template = Template::new(
    "Acorn",
    &[
        "OXOOOOO",
        "OOOXOOO",
        "XXOOXXX",
    ],
);

pub(super) static BUGFACE: Template = Template::new(
    "Bugface",
    &[
        "XXOXX",
        "XXOXX",
        "OOXOO",
    ],
);

pub(super) static TOAD: Template = Template::new(
    "Toad",
    &[
        "OXXX",
        "XXXO",
    ],
);

pub(super) static CHAOS: Template = Template::new(
    "Chaos",
    &[
        "OOXO",
        "XXOO",
        "OOXX",
        "OXOO",
    ],
);

pub(super) static DIEHARD: Template = Template::new(
    "Diehard",
    &[
        "OOOOOOXO",
        "XXOOOOOO",
        "OXOOOXXX",
    ],
);

pub(super) static FLOWER: Template = Template::new(
    "Flower",
    &[
        "OXXO",
        "XOXX",
        "OXXO",
    ],
);

pub(super) static GLIDER: Template = Template::new(
    "Glider",
    &[
        "OXO",
        "OOX",
        "XXX",
    ],
);

pub(super) static HORSESHOE: Template = Template::new(
    "Horseshoe",
    &[
        "XXX",
        "XOX",
        "XOX",
        "OOO",
        "XOX",
        "XOX",
        "XXX",
    ],
);

pub(super) static LASER_0: Template = Template::new(
    "Laser-0",
    &[
        "XXOO",
        "XOOO",
        "OOOX",
        "OOXX",
    ],
);

pub(super) static LASER_2: Template = Template::new(
    "Laser-2",
    &[
        "XXOOO",
        "XOXOO",
        "OOOOO",
        "OOXOX",
        "OOOXX",
    ],
);

pub(super) static OCTAGON: Template = Template::new(
    "Octagon",
    &[
        "OXOOXO",
        "XOXXOX",
        "OXOOXO",
        "OXOOXO",
        "XOXXOX",
        "OXOOXO",
    ],
);

pub(super) static PENTADECATHLON: Template = Template::new(
    "Pentadecathlon",
    &[
        "OOXOOOOXOO",
        "XXOXXXXOXX",
        "OOXOOOOXOO",
    ],
);

pub(super) static PULSAR: Template = Template::new(
    "Pulsar",
    &[
        "OOXXOOOOOXXOO",
        "OOOXXOOOXXOOO",
        "XOOXOXOXOXOOX",
        "XXXOXXOXXOXXX",
        "OXOXOXOXOX.XO",
        "OOXXXOOOXXXOO",
        "OOOOOOOOOOOOO",
        "OOXXXOOOXXXOO",
        "OXOXOXOXOXOXO",
        "XXXOXXOXXOXXX",
        "XOOXOXOXOXOOX",
        "OOOXXOOOXXOOO",
        "OOXXOOOOOXXOO",
    ],
);

pub(super) static QUEEN_BEE_SHUTTLE: Template = Template::new(
    "Queen bee shuttle",
    &[
        "XXOOO",
        "OOXOO",
        "OOOXO",
        "OOOXO",
        "OOOXO",
        "OOXOO",
        "XXOOO",
    ],
);

pub(super) static SPACESHIP_LIGHTWEIGHT: Template = Template::new(
    "Lightweight spaceship",
    &[
        "OXOOX",
        "XOOOO",
        "XOOOX",
        "XXXXO",
    ],
);

pub(super) static TUMBLER: Template = Template::new(
    "Tumbler",
    &[
        "OXOOOXO",
        "OXXOXXO",
        "OOXOXOO",
        "XOXOXOX",
        "XXOOOXX",
        "OXOOOXO",
    ],
);
