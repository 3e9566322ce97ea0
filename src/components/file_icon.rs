use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FileIconLargeProps {
    pub color: AttrValue,
}

#[function_component(FileIconLarge)]
pub fn file_icon_large(props: &FileIconLargeProps) -> Html {
    html! {
        <svg
            class="file-icon-large"
            width="20"
            height="26"
            viewBox="0 0 20 26"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
            aria-hidden="true"
        >
            <path
                d="M12.5 0H2.5C1.125 0 0.0125 1.17 0.0125 2.6L0 23.4C0 24.83 1.1125 26 2.4875 26H17.5C18.875 26 20 24.83 20 23.4V7.8L12.5 0ZM11.25 9.1V1.95L18.125 9.1H11.25Z"
                fill={props.color.clone()}
            />
        </svg>
    }
}
