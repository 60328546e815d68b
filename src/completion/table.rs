//! The fixed utility-class suffix table.

/// Static suffixes and the CSS they expand to, in presentation order.
///
/// Labels are produced as `{prefix}-{suffix}-`. The hover variant
/// (`{prefix}-h:{prefix}-`) is not listed here because it repeats the
/// prefix; it is spliced in at [`HOVER_POSITION`].
pub(crate) const SUFFIX_TABLE: &[(&str, &str)] = &[
    ("m", "margin"),
    ("mt", "margin-top"),
    ("mb", "margin-bottom"),
    ("ml", "margin-left"),
    ("mr", "margin-right"),
    ("mtb", "margin-top / margin-bottom"),
    ("mlr", "margin-left / margin-right"),
    ("p", "padding"),
    ("pt", "padding-top"),
    ("pb", "padding-bottom"),
    ("pl", "padding-left"),
    ("pr", "padding-right"),
    ("ptb", "padding-top / padding-bottom"),
    ("plr", "padding-left / padding-right"),
    ("fs", "font-size"),
    ("fw", "font-weight"),
    ("bg", "background-color"),
    ("bc", "border-color"),
    ("d", "display"),
    ("h", "height"),
    ("w", "width"),
    ("zi", "z-index"),
    ("lh", "line-height"),
    ("bw", "border-width"),
    ("br", "border-radius"),
    ("bs", "border-style / border-shadow"),
    ("of", "object-fit"),
    ("c", "color / cursor"),
    ("e", "1行省略 / 2行省略"),
    ("gg", "grid-gap"),
    ("grg", "grid-row-gap"),
    ("gcg", "grid-column-gap"),
    ("ai", "align-items"),
    ("jc", "justify-content"),
    ("fd", "flex-direction"),
    ("fg", "flex-grow"),
    ("t", "top"),
    ("b", "bottom"),
    ("r", "right"),
    ("l", "left"),
    ("o", "opacity / overflow / order"),
    ("ox", "overflow-x"),
    ("oy", "overflow-y"),
    ("ta", "text-align"),
];

/// Index of the hover variant in the full static list (between `fw` and
/// `bg`).
pub(crate) const HOVER_POSITION: usize = 16;

pub(crate) const HOVER_DESCRIPTION: &str = "hover:";
