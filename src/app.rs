use crate::components::file_input_field::FileInputField;
use crate::constants::MAX_FILE_UPLOAD_SIZE;
use crate::theme;
use gloo::console::log;
use web_sys::File;
use yew::prelude::*;

const INPUT_ID: &str = "upload-file-input";

pub struct App {
    file: Option<File>,
    upload_file_error: String,
    logs: Vec<String>,
}

pub enum Msg {
    SetFile(Option<File>),
    SetUploadFileError(String),
    AddLog(String),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            file: None,
            upload_file_error: String::new(),
            logs: vec![format!(
                "Ready. Files up to {} are accepted",
                format_size(MAX_FILE_UPLOAD_SIZE)
            )],
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetFile(Some(file)) => {
                self.add_log(
                    ctx,
                    format!("File selected: {} ({})", file.name(), format_size(file.size())),
                );
                self.file = Some(file);
                true
            }
            Msg::SetFile(None) => {
                if let Some(previous) = self.file.take() {
                    self.add_log(ctx, format!("Selection cleared: {}", previous.name()));
                }
                true
            }
            Msg::SetUploadFileError(error) => {
                if !error.is_empty() {
                    log!("upload rejected:", error.clone());
                    self.add_log(ctx, format!("Error: {}", error));
                }
                self.upload_file_error = error;
                true
            }
            Msg::AddLog(entry) => {
                self.logs.push(entry);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let upload_file_error = (!self.upload_file_error.is_empty())
            .then(|| AttrValue::from(self.upload_file_error.clone()));

        let text = match &self.file {
            Some(file) => AttrValue::from(file.name()),
            None => AttrValue::Static("No file chosen"),
        };

        html! {
            <div class="app-container">
                <style>{ theme::stylesheet() }</style>
                <header>
                    <h1>{ "Upload" }</h1>
                </header>

                <main>
                    <div class="panel">
                        <FileInputField
                            text={text}
                            text_field_height="56px"
                            upload_file_error={upload_file_error}
                            end_adornment={html! {
                                <label for={INPUT_ID} class="browse-button">{ "Browse" }</label>
                            }}
                            input_id={INPUT_ID}
                            set_file={ctx.link().callback(Msg::SetFile)}
                            set_upload_file_error={ctx.link().callback(Msg::SetUploadFileError)}
                            class={classes!("upload-form-field")}
                        />
                        if !self.upload_file_error.is_empty() {
                            <p class="upload-error">{ self.upload_file_error.clone() }</p>
                        }
                        if let Some(file) = &self.file {
                            <p class="upload-summary">
                                { format!("{} - {}", file.name(), format_size(file.size())) }
                            </p>
                        }
                    </div>

                    <div class="panel">
                        <h2>{ "Logs" }</h2>
                        <div class="logs-container">
                            {
                                for self.logs.iter().map(|log| {
                                    html! { <div class="log-entry">{ log }</div> }
                                })
                            }
                        </div>
                    </div>
                </main>
            </div>
        }
    }
}

impl App {
    fn add_log(&mut self, ctx: &Context<Self>, message: String) {
        let timestamp = js_sys::Date::new_0().to_locale_time_string("en-US");
        let log_entry = format!("[{}] {}", timestamp, message);
        ctx.link().send_message(Msg::AddLog(log_entry));
    }
}

fn format_size(bytes: f64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes / KB)
    } else {
        format!("{} bytes", bytes)
    }
}
