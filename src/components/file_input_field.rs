use web_sys::{Event, File, HtmlInputElement};
use yew::prelude::*;

use crate::components::file_icon::FileIconLarge;
use crate::constants::MAX_FILE_UPLOAD_SIZE;
use crate::theme::{Height, BACKGROUND_COLOR, ERROR_COLOR};
use crate::validation::{first_file, handle_selection};

#[derive(Properties, PartialEq)]
pub struct FileInputFieldProps {
    /// Label shown inside the clickable region.
    pub text: AttrValue,
    pub text_field_height: Height,
    /// Non-empty value draws the error border. Does not disable the input.
    #[prop_or_default]
    pub upload_file_error: Option<AttrValue>,
    /// Rendered after the hidden native input, e.g. a `<label for=..>` button.
    #[prop_or_default]
    pub end_adornment: Option<Html>,
    pub input_id: AttrValue,
    pub set_file: Callback<Option<File>>,
    pub set_upload_file_error: Callback<String>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(MAX_FILE_UPLOAD_SIZE)]
    pub max_size: f64,
}

#[function_component(FileInputField)]
pub fn file_input_field(props: &FileInputFieldProps) -> Html {
    let on_change = {
        let set_file = props.set_file.clone();
        let set_upload_file_error = props.set_upload_file_error.clone();
        let max_size = props.max_size;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            handle_selection(
                first_file(input.files()),
                max_size,
                &set_file,
                &set_upload_file_error,
            );
        })
    };

    let has_error = props
        .upload_file_error
        .as_ref()
        .map_or(false, |error| !error.is_empty());

    let wrapper_class = classes!(
        "file-input-wrapper",
        has_error.then_some("file-input-wrapper--error"),
        props.class.clone()
    );
    let wrapper_style =
        has_error.then(|| AttrValue::from(format!("border: 2px solid {}", ERROR_COLOR)));
    let input_style = format!("min-height: {}", props.text_field_height.to_css());

    html! {
        <div class={wrapper_class} style={wrapper_style}>
            <div class="file-input-icon-panel">
                <FileIconLarge color={BACKGROUND_COLOR} />
            </div>
            <div class="file-input" style={input_style}>
                <span class="file-input-text">{ props.text.clone() }</span>
                <input
                    id={props.input_id.clone()}
                    type="file"
                    class="file-input-native"
                    onchange={on_change}
                />
                if let Some(adornment) = props.end_adornment.clone() {
                    { adornment }
                }
            </div>
        </div>
    }
}
