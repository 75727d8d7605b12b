//! Class helpers for the pricing section, kept in one place so cards and
//! toggle stay visually consistent.

// ============================================
// SECTION
// ============================================

pub const SECTION: &str = "border-b border-slate-200 py-20 bg-white";
pub const CONTAINER: &str = "max-w-6xl mx-auto px-6";
pub const HEADING: &str =
    "text-3xl md:text-4xl font-semibold text-center tracking-tight text-slate-900";
pub const SUBHEADING: &str = "text-center text-slate-500 mt-3";
pub const GRID: &str = "mt-14 grid md:grid-cols-3 gap-10";

// ============================================
// CURRENCY TOGGLE
// ============================================

pub const TOGGLE_WRAPPER: &str = "flex justify-center mt-8";
pub const TOGGLE_GROUP: &str = "flex rounded-full border border-slate-300 overflow-hidden";

pub fn toggle_button(active: bool) -> &'static str {
    if active {
        "px-6 py-2 text-sm font-medium transition bg-slate-900 text-white"
    } else {
        "px-6 py-2 text-sm font-medium transition bg-white text-slate-600 hover:bg-slate-100"
    }
}

// ============================================
// CARDS
// ============================================

pub fn card(highlighted: bool) -> &'static str {
    if highlighted {
        "rounded-2xl border-2 border-slate-900 p-10 shadow-md hover:shadow-xl transition"
    } else {
        "rounded-2xl border border-slate-200 p-10 shadow-sm hover:shadow-lg transition"
    }
}

pub const CARD_TITLE: &str = "text-xl font-semibold text-center text-slate-900";
pub const CARD_PRICE: &str = "mt-6 text-4xl font-bold text-center tracking-tight text-slate-900";
pub const PRICE_SUFFIX: &str = "text-lg font-medium text-slate-500";
pub const FEATURE_LIST: &str = "mt-10 space-y-3 text-sm";
pub const CARD_DESCRIPTION: &str = "mt-8 text-sm text-slate-600 leading-relaxed text-center";

// ============================================
// FEATURE ROWS
// ============================================

pub fn feature_row(included: bool) -> &'static str {
    if included {
        "flex items-start gap-2 text-slate-800 font-medium"
    } else {
        "flex items-start gap-2 text-slate-400 line-through"
    }
}

pub fn feature_icon(included: bool) -> &'static str {
    if included {
        "mt-[2px] h-4 w-4 text-emerald-600 shrink-0"
    } else {
        "mt-[2px] h-4 w-4 text-slate-300 shrink-0"
    }
}
