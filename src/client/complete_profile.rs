#![allow(non_snake_case)]

use crate::client;
use crate::common;

use client::field_error;
use client::log_to_console;
use client::top_bar;
use client::Route;
use client::State;
use common::height_options;
use common::DrinkingStatus;
use common::ErrorMap;
use common::Field;
use common::FormState;
use common::Gender;
use common::PhotoHandle;
use common::ProfileCard;
use common::ProfileSink;
use common::ProfileWizard;
use common::RelationshipGoal;
use common::SmokingStatus;
use common::Step;
use common::SubmitOutcome;
use common::AVAILABLE_INTERESTS;
use common::MAX_PHOTOS;

use dioxus::prelude::*;
use std::sync::{Arc, Mutex, MutexGuard};
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;

const PHOTO_INPUT_ID: &str = "photo-input";

/// Stand-in for the profile service: logs the snapshot to the console.
struct ConsoleSink;

impl ProfileSink for ConsoleSink {
    fn submit(&mut self, profile: &FormState) -> Result<(), String> {
        let card = ProfileCard::from_form(profile);
        let payload = serde_json::to_string(&card).map_err(|err| err.to_string())?;
        log_to_console(("profile completed", &payload));
        Ok(())
    }
}

/// One uploaded photo on the browser side. Owns a temporary object URL that
/// is revoked when the handle is dropped, whether by removal, by overflow
/// discard or by the wizard unmounting.
struct PhotoFile {
    name: String,
    url: String,
}

impl PhotoFile {
    fn from_file(file: &web_sys::File) -> Option<Self> {
        let url = web_sys::Url::create_object_url_with_blob(file).ok()?;
        Some(Self {
            name: file.name(),
            url,
        })
    }
}

impl PhotoHandle for PhotoFile {
    fn label(&self) -> &str {
        &self.name
    }

    fn preview_url(&self) -> &str {
        &self.url
    }
}

impl Drop for PhotoFile {
    fn drop(&mut self) {
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}

/// Plain-data copy of the form for rendering.
#[derive(Clone, PartialEq)]
pub struct FormView {
    first_name: String,
    last_name: String,
    date_of_birth: String,
    gender: Gender,
    location: String,
    education: String,
    occupation: String,
    bio: String,
    bio_len: usize,
    interests: Vec<String>,
    relationship_goal: RelationshipGoal,
    height: String,
    smoking: SmokingStatus,
    drinking: DrinkingStatus,
    photos: Vec<(String, String)>,
    submit_error: Option<String>,
}

#[derive(Clone)]
pub struct Wizard {
    inner: Arc<Mutex<Inner>>,
}

struct Inner {
    core: ProfileWizard,
    step: Signal<Step>,
    errors: Signal<ErrorMap>,
    edits: Signal<u32>,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                core: ProfileWizard::new(),
                step: Signal::new(Step::BasicInfo),
                errors: Signal::new(ErrorMap::new()),
                edits: Signal::new(0),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap()
    }

    pub fn signals(&self) -> (Signal<Step>, Signal<ErrorMap>, Signal<u32>) {
        let lock = self.lock();
        (lock.step.clone(), lock.errors.clone(), lock.edits.clone())
    }

    pub fn view(&self) -> FormView {
        let lock = self.lock();
        let form = lock.core.form();

        FormView {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            date_of_birth: form.date_of_birth.clone(),
            gender: form.gender,
            location: form.location.clone(),
            education: form.education.clone(),
            occupation: form.occupation.clone(),
            bio: form.bio.clone(),
            bio_len: form.bio.chars().count(),
            interests: form.interests.to_vec(),
            relationship_goal: form.relationship_goal,
            height: form.height.clone(),
            smoking: form.smoking,
            drinking: form.drinking,
            photos: form
                .photos
                .iter()
                .map(|p| (p.label().to_string(), p.preview_url().to_string()))
                .collect(),
            submit_error: lock.core.submit_error().map(str::to_string),
        }
    }

    pub fn advance(&self) {
        let mut lock = self.lock();
        lock.core.advance();
        Self::sync(&mut lock);
    }

    pub fn retreat(&self) {
        let mut lock = self.lock();
        lock.core.retreat();
        Self::sync(&mut lock);
    }

    /// Runs the final validation pass and hands the profile to the sink.
    /// Returns the completed card so the caller can store it in session
    /// state and navigate away.
    pub fn complete(&self) -> Option<ProfileCard> {
        let mut sink = ConsoleSink;
        let mut lock = self.lock();

        let outcome = lock.core.submit(&mut sink);
        let card = match outcome {
            SubmitOutcome::Completed => Some(ProfileCard::from_form(lock.core.form())),
            SubmitOutcome::Rejected => None,
            SubmitOutcome::Failed(reason) => {
                log_to_console(("profile submission failed", &reason));
                None
            }
        };

        Self::sync(&mut lock);
        card
    }

    pub fn set(&self, field: Field, value: String) {
        let mut lock = self.lock();
        match field {
            Field::FirstName => lock.core.set_first_name(value),
            Field::LastName => lock.core.set_last_name(value),
            Field::DateOfBirth => lock.core.set_date_of_birth(value),
            Field::Location => lock.core.set_location(value),
            Field::Education => lock.core.set_education(value),
            Field::Occupation => lock.core.set_occupation(value),
            Field::Bio => lock.core.set_bio(value),
            Field::Height => lock.core.set_height(value),
            Field::Interests | Field::ProfileImages => {}
        }
        Self::sync(&mut lock);
    }

    pub fn set_gender(&self, value: Gender) {
        let mut lock = self.lock();
        lock.core.set_gender(value);
        Self::sync(&mut lock);
    }

    pub fn set_relationship_goal(&self, value: RelationshipGoal) {
        let mut lock = self.lock();
        lock.core.set_relationship_goal(value);
        Self::sync(&mut lock);
    }

    pub fn set_smoking(&self, value: SmokingStatus) {
        let mut lock = self.lock();
        lock.core.set_smoking(value);
        Self::sync(&mut lock);
    }

    pub fn set_drinking(&self, value: DrinkingStatus) {
        let mut lock = self.lock();
        lock.core.set_drinking(value);
        Self::sync(&mut lock);
    }

    pub fn toggle_interest(&self, interest: &str) {
        let mut lock = self.lock();
        lock.core.toggle_interest(interest);
        Self::sync(&mut lock);
    }

    pub fn add_custom_interest(&self, raw: &str) -> bool {
        let mut lock = self.lock();
        let added = lock.core.add_custom_interest(raw);
        Self::sync(&mut lock);
        added
    }

    pub fn remove_photo(&self, index: usize) {
        let mut lock = self.lock();
        lock.core.remove_photo(index);
        Self::sync(&mut lock);
    }

    /// Drains the hidden file input and appends the selection, reporting any
    /// overflow past the photo cap to the console.
    pub fn add_photos_from_input(&self) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(element) = document.get_element_by_id(PHOTO_INPUT_ID) else {
            return;
        };
        let input: web_sys::HtmlInputElement = element.unchecked_into();

        let mut handles: Vec<Box<dyn PhotoHandle>> = vec![];
        if let Some(files) = input.files() {
            for i in 0..files.length() {
                let Some(file) = files.item(i) else { continue };
                if let Some(photo) = PhotoFile::from_file(&file) {
                    handles.push(Box::new(photo));
                }
            }
        }
        // allow picking the same file again later
        input.set_value("");

        let selected = handles.len();
        let mut lock = self.lock();
        let accepted = lock.core.add_photos(handles);
        if accepted < selected {
            log_to_console(("photo cap reached, discarded", selected - accepted));
        }
        Self::sync(&mut lock);
    }

    fn sync(lock: &mut MutexGuard<'_, Inner>) {
        let step = lock.core.step();
        let errors = lock.core.errors().clone();
        *lock.step.write() = step;
        *lock.errors.write() = errors;
        *lock.edits.write() += 1;
    }
}

#[component]
pub fn CompleteProfile() -> Element {
    let state = use_context::<State>();
    let navigator = use_navigator();
    let wizard = use_hook(Wizard::new);
    let new_interest = use_signal(String::new);

    let (step, errors, edits) = wizard.signals();
    let step = step();
    // subscribing to the edit counter keeps controlled inputs and the bio
    // counter fresh on every keystroke
    let _revision = edits();
    let view = wizard.view();
    let step_number = step.number();
    let step_total = Step::TOTAL;
    let step_title = step.title();
    let step_blurb = step.blurb();
    let percent = step_number as u32 * 100 / step_total as u32;

    let wizard_back = wizard.clone();
    let wizard_next = wizard.clone();
    let wizard_done = wizard.clone();

    rsx! {
        { top_bar() }
        div {
            class: "wizard-shell",
            div {
                class: "wizard-header",
                h1 { "Complete Your Profile" }
                span { class: "muted", "Step {step_number} of {step_total}" }
            }
            div {
                class: "progress-track",
                div {
                    class: "progress-fill",
                    width: "{percent}%",
                }
            }
            div {
                class: "wizard-card",
                div {
                    class: "step-heading",
                    h2 { "{step_title}" }
                    p { class: "muted", "{step_blurb}" }
                }
                {
                    match step {
                        Step::BasicInfo => basic_info_step(wizard.clone(), view.clone(), errors),
                        Step::Background => background_step(wizard.clone(), view.clone(), errors),
                        Step::Lifestyle => {
                            lifestyle_step(wizard.clone(), view.clone(), errors, new_interest)
                        }
                        Step::Photos => photos_step(wizard.clone(), view.clone(), errors),
                    }
                }
                div {
                    class: "wizard-nav",
                    button {
                        class: "mybutton back",
                        prevent_default: "onclick",
                        disabled: step.is_first(),
                        onclick: move |_| {
                            wizard_back.retreat();
                        },
                        "Previous"
                    }
                    if step.is_last() {
                        button {
                            class: "mybutton confirm",
                            prevent_default: "onclick",
                            onclick: move |_| {
                                if let Some(card) = wizard_done.complete() {
                                    state.set_profile(card);
                                    navigator.replace(Route::Browse {});
                                }
                            },
                            "Complete Profile"
                        }
                    } else {
                        button {
                            class: "mybutton",
                            prevent_default: "onclick",
                            onclick: move |_| {
                                wizard_next.advance();
                            },
                            "Next"
                        }
                    }
                }
                {
                    match view.submit_error {
                        Some(reason) => rsx! { p { class: "field-error", "{reason}" } },
                        None => rsx! { "" },
                    }
                }
            }
        }
    }
}

fn text_field(
    wizard: Wizard,
    errors: Signal<ErrorMap>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
) -> Element {
    rsx! {
        div {
            class: "form-group",
            label { "{label}" }
            input {
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |event| wizard.set(field, event.value()),
            }
            { field_error(&errors.read(), field) }
        }
    }
}

fn basic_info_step(wizard: Wizard, view: FormView, errors: Signal<ErrorMap>) -> Element {
    let gender_wizard = wizard.clone();

    rsx! {
        div {
            class: "field-grid",
            { text_field(wizard.clone(), errors, Field::FirstName, "First Name *", "text", "Enter your first name", view.first_name.clone()) }
            { text_field(wizard.clone(), errors, Field::LastName, "Last Name *", "text", "Enter your last name", view.last_name.clone()) }
        }
        { text_field(wizard.clone(), errors, Field::DateOfBirth, "Date of Birth *", "date", "", view.date_of_birth.clone()) }
        div {
            class: "form-group",
            label { "Gender" }
            div {
                class: "choice-grid",
                for gender in Gender::iter() {
                    button {
                        prevent_default: "onclick",
                        class: if view.gender == gender { "choice selected" } else { "choice" },
                        onclick: {
                            let wizard = gender_wizard.clone();
                            move |_| wizard.set_gender(gender)
                        },
                        "{gender}"
                    }
                }
            }
        }
        { text_field(wizard, errors, Field::Location, "Location *", "text", "Enter your city", view.location) }
    }
}

fn background_step(wizard: Wizard, view: FormView, errors: Signal<ErrorMap>) -> Element {
    let bio_wizard = wizard.clone();
    let goal_wizard = wizard.clone();

    rsx! {
        { text_field(wizard.clone(), errors, Field::Education, "Education *", "text", "e.g., Bachelor's in Computer Science", view.education.clone()) }
        { text_field(wizard, errors, Field::Occupation, "Occupation *", "text", "e.g., Software Engineer", view.occupation.clone()) }
        div {
            class: "form-group",
            label { "Bio * (minimum 50 characters)" }
            textarea {
                rows: "4",
                placeholder: "Tell us about yourself, your interests, and what you're looking for...",
                value: "{view.bio}",
                oninput: move |event| bio_wizard.set(Field::Bio, event.value()),
            }
            span {
                class: if view.bio_len < 50 { "char-count short" } else { "char-count" },
                "{view.bio_len}/50 minimum"
            }
            { field_error(&errors.read(), Field::Bio) }
        }
        div {
            class: "form-group",
            label { "Relationship Goal" }
            div {
                class: "choice-grid",
                for goal in RelationshipGoal::iter() {
                    button {
                        prevent_default: "onclick",
                        class: if view.relationship_goal == goal { "choice selected" } else { "choice" },
                        onclick: {
                            let wizard = goal_wizard.clone();
                            move |_| wizard.set_relationship_goal(goal)
                        },
                        "{goal}"
                    }
                }
            }
        }
    }
}

fn lifestyle_step(
    wizard: Wizard,
    view: FormView,
    errors: Signal<ErrorMap>,
    mut new_interest: Signal<String>,
) -> Element {
    let chips_wizard = wizard.clone();
    let custom_wizard = wizard.clone();
    let height_wizard = wizard.clone();
    let smoking_wizard = wizard.clone();
    let drinking_wizard = wizard.clone();

    // custom entries the user typed, shown after the fixed vocabulary
    let custom: Vec<String> = view
        .interests
        .iter()
        .filter(|entry| !AVAILABLE_INTERESTS.contains(&entry.as_str()))
        .cloned()
        .collect();

    let smoking_options: Vec<(String, String, bool)> = SmokingStatus::iter()
        .map(|status| {
            (
                status.to_string().to_lowercase(),
                status.to_string(),
                view.smoking == status,
            )
        })
        .collect();
    let drinking_options: Vec<(String, String, bool)> = DrinkingStatus::iter()
        .map(|status| {
            (
                status.to_string().to_lowercase(),
                status.to_string(),
                view.drinking == status,
            )
        })
        .collect();

    rsx! {
        div {
            class: "form-group",
            label { "Interests * (select at least 3)" }
            div {
                class: "chip-grid",
                for interest in AVAILABLE_INTERESTS {
                    button {
                        prevent_default: "onclick",
                        class: if view.interests.iter().any(|i| i == interest) { "chip selected" } else { "chip" },
                        onclick: {
                            let wizard = chips_wizard.clone();
                            move |_| wizard.toggle_interest(interest)
                        },
                        "{interest}"
                    }
                }
                for interest in custom {
                    button {
                        prevent_default: "onclick",
                        class: "chip selected",
                        onclick: {
                            let wizard = chips_wizard.clone();
                            let name = interest.clone();
                            move |_| wizard.toggle_interest(&name)
                        },
                        "{interest} ✕"
                    }
                }
            }
            div {
                class: "input-group",
                input {
                    r#type: "text",
                    placeholder: "Add custom interest",
                    value: "{new_interest}",
                    oninput: move |event| new_interest.set(event.value()),
                }
                button {
                    prevent_default: "onclick",
                    class: "mybutton",
                    onclick: move |_| {
                        if custom_wizard.add_custom_interest(&new_interest()) {
                            new_interest.set(String::new());
                        }
                    },
                    "Add"
                }
            }
            { field_error(&errors.read(), Field::Interests) }
        }
        div {
            class: "field-grid",
            div {
                class: "form-group",
                label { "Height *" }
                select {
                    value: "{view.height}",
                    oninput: move |event| height_wizard.set(Field::Height, event.value()),
                    option { value: "", "Select height" }
                    for height in height_options() {
                        option { value: "{height}", selected: view.height == height, "{height}" }
                    }
                }
                { field_error(&errors.read(), Field::Height) }
            }
            div {
                class: "form-group",
                label { "Smoking" }
                select {
                    oninput: move |event| {
                        if let Ok(status) = event.value().parse() {
                            smoking_wizard.set_smoking(status);
                        }
                    },
                    for (value, label, selected) in smoking_options {
                        option { value: "{value}", selected: selected, "{label}" }
                    }
                }
            }
        }
        div {
            class: "form-group",
            label { "Drinking" }
            select {
                oninput: move |event| {
                    if let Ok(status) = event.value().parse() {
                        drinking_wizard.set_drinking(status);
                    }
                },
                for (value, label, selected) in drinking_options {
                    option { value: "{value}", selected: selected, "{label}" }
                }
            }
        }
    }
}

fn photos_step(wizard: Wizard, view: FormView, errors: Signal<ErrorMap>) -> Element {
    let upload_wizard = wizard.clone();

    rsx! {
        div {
            class: "form-group",
            label { "Upload Photos * (at least 1, maximum {MAX_PHOTOS})" }
            div {
                class: "photo-grid",
                for index in 0..MAX_PHOTOS {
                    { match view.photos.get(index) {
                        Some((label, url)) => rsx! {
                            div {
                                class: "photo-slot filled",
                                img { src: "{url}", alt: "{label}" }
                                button {
                                    prevent_default: "onclick",
                                    class: "remove-photo",
                                    onclick: {
                                        let wizard = wizard.clone();
                                        move |_| wizard.remove_photo(index)
                                    },
                                    "✕"
                                }
                            }
                        },
                        None => rsx! {
                            div {
                                class: "photo-slot",
                                button {
                                    prevent_default: "onclick",
                                    class: "add-photo",
                                    onclick: move |_| {
                                        eval(&format!(
                                            "document.getElementById('{}').click();",
                                            PHOTO_INPUT_ID
                                        ));
                                    },
                                    "Add Photo"
                                }
                            }
                        },
                    } }
                }
            }
            input {
                id: "{PHOTO_INPUT_ID}",
                class: "hidden-input",
                r#type: "file",
                accept: "image/*",
                multiple: true,
                onchange: move |_| upload_wizard.add_photos_from_input(),
            }
            { field_error(&errors.read(), Field::ProfileImages) }
            div {
                class: "photo-tips",
                h4 { "Photo Tips:" }
                ul {
                    li { "Use clear, recent photos of yourself" }
                    li { "Include a mix of close-up and full-body photos" }
                    li { "Show your personality and interests" }
                    li { "Avoid group photos as your main image" }
                }
            }
        }
    }
}
