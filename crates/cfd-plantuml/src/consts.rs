//! Internal constants for diagram rendering.

/// Footer line closing every diagram.
pub const FOOTER: &str = "center footer Generated with cfdiagram";

/// Title prefix of the single-app diagram.
pub const SINGLE_APP_TITLE: &str = "Single App Diagram";

/// Component styling of the single-app diagram.
pub const SKIN: &str = "skinparam componentStyle uml2

skinparam component {
FontSize 18
FontName Impact
FontColor #009F9D
StereotypeFontName Impact
StereotypeFontSize 14
StereotypeFontColor #0f0a3c
BorderColor #0F0A3C
BackgroundColor #cdffeb
ArrowFontName Impact
ArrowColor #0F0A3C
ArrowFontColor #777777
}

skinparam titleBorderRoundCorner 5
skinparam titleBorderThickness 2
skinparam titleBorderColor #393e46
skinparam titleBackgroundColor #eeeeee
skinparam footerFontColor #07456f";
