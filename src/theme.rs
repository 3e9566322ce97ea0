use yew::html::IntoPropValue;
use yew::AttrValue;

pub const ERROR_COLOR: &str = "#C85151";
pub const PRIMARY_COLOR: &str = "#1e3a5f";
pub const BACKGROUND_COLOR: &str = "#ffffff";
pub const DIVIDER_COLOR: &str = "rgba(0, 0, 0, 0.12)";
pub const INPUT_BACKGROUND_WIDE: &str = "#e8e8e8";

/// From this width up the input gets the lighter background.
pub const BREAKPOINT_SM_PX: u32 = 600;
/// Viewports narrower than this hide the decorative icon panel.
pub const BREAKPOINT_MD_PX: u32 = 960;

/// A CSS length: plain numbers are pixels, strings are passed through.
#[derive(Debug, Clone, PartialEq)]
pub enum Height {
    Px(u32),
    Css(AttrValue),
}

impl Height {
    pub fn to_css(&self) -> String {
        match self {
            Height::Px(px) => format!("{}px", px),
            Height::Css(value) => value.to_string(),
        }
    }
}

impl IntoPropValue<Height> for u32 {
    fn into_prop_value(self) -> Height {
        Height::Px(self)
    }
}

impl IntoPropValue<Height> for &'static str {
    fn into_prop_value(self) -> Height {
        Height::Css(AttrValue::Static(self))
    }
}

impl IntoPropValue<Height> for String {
    fn into_prop_value(self) -> Height {
        Height::Css(AttrValue::from(self))
    }
}

/// Static rules for the picker. Dynamic parts (border, min-height) are inlined.
pub fn stylesheet() -> String {
    format!(
        r#"
.file-input-wrapper {{
  width: 100%;
  display: flex;
  align-items: stretch;
  border-radius: 3px;
  overflow: hidden;
}}
.file-input-wrapper--error {{
  border: 2px solid {error};
}}
.file-input-icon-panel {{
  width: 44px;
  background-color: {primary};
  display: flex;
  align-items: center;
  justify-content: center;
}}
.file-input {{
  flex-grow: 1;
  height: 100%;
  padding: 0;
  line-height: 1.5;
  background-color: {divider};
  display: flex;
  align-items: stretch;
  overflow: hidden;
  justify-content: space-between;
  border-radius: 3px;
}}
.file-input-text {{
  font-weight: 400;
  padding-left: 16px;
  display: flex;
  align-items: center;
}}
.file-input-native {{
  display: none;
}}
@media (max-width: {md_max}px) {{
  .file-input-icon-panel {{
    display: none;
  }}
}}
@media (min-width: {sm}px) {{
  .file-input {{
    background-color: {wide};
  }}
}}
"#,
        error = ERROR_COLOR,
        primary = PRIMARY_COLOR,
        divider = DIVIDER_COLOR,
        wide = INPUT_BACKGROUND_WIDE,
        sm = BREAKPOINT_SM_PX,
        md_max = BREAKPOINT_MD_PX - 1,
    )
}
