use std::cell::RefCell;
use std::rc::Rc;

use payloads::{ImageFile, MAX_IMAGE_SIZE, responses};
use room_form::{
    Field, FormEffects, Mode, PreviewRegistry, RoomForm,
    SubmissionCoordinator,
};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ObjectUrlSource;
use crate::contexts::toast::{ToastHandle, use_toast};
use crate::hooks::use_room_facilities;
use crate::{Route, get_api_client};

/// Toast and navigation side effects for a submission, routed through the
/// app's toast context and yew-router.
struct RouterEffects {
    toast: ToastHandle,
    navigator: Navigator,
}

impl FormEffects for RouterEffects {
    fn notify_success(&self, message: &str) {
        self.toast.success(message);
    }

    fn notify_error(&self, message: &str) {
        self.toast.error(message);
    }

    fn navigate_to_rooms(&self) {
        self.navigator.push(&Route::Rooms);
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Starting form state; empty for create, seeded for edit.
    pub initial: RoomForm,
    /// URLs of images already stored server-side, rendered read-only.
    #[prop_or_default]
    pub stored_images: Vec<String>,
}

#[function_component]
pub fn RoomEditor(props: &Props) -> Html {
    let navigator = use_navigator().unwrap();
    let toast = use_toast();
    let facilities_hook = use_room_facilities();

    let form = use_state(|| props.initial.clone());
    // Dropped on unmount, which releases every outstanding object URL.
    let previews = use_mut_ref(|| PreviewRegistry::new(ObjectUrlSource));
    let is_saving = use_state(|| false);
    let file_error = use_state(|| None::<String>);

    // Surface facility fetch failures as a toast; the form itself stays
    // usable, minus the facility checkboxes.
    {
        let toast = toast.clone();
        use_effect_with(facilities_hook.error.clone(), move |error| {
            if let Some(error) = error {
                toast.error(format!("Failed to load facilities: {error}"));
            }
        });
    }

    let on_room_number = text_setter(&form, RoomForm::set_room_number);
    let on_price = text_setter(&form, RoomForm::set_price);
    let on_capacity = text_setter(&form, RoomForm::set_capacity);
    let on_discount = text_setter(&form, RoomForm::set_discount);

    let on_file_select = {
        let form = form.clone();
        let previews = previews.clone();
        let file_error = file_error.clone();

        Callback::from(move |e: Event| {
            let form = form.clone();
            let previews = previews.clone();
            let file_error = file_error.clone();

            let input: HtmlInputElement = e.target_unchecked_into();
            let files = match input.files() {
                Some(f) => f,
                None => return,
            };

            let mut selected = Vec::new();
            for i in 0..files.length() {
                if let Some(file) = files.get(i) {
                    selected.push(file);
                }
            }
            // Allow re-selecting the same files later.
            input.set_value("");

            yew::platform::spawn_local(async move {
                let mut images = Vec::new();
                let mut rejected = None;

                for file in selected {
                    let size = file.size() as usize;
                    if size > MAX_IMAGE_SIZE {
                        rejected = Some(format!(
                            "{} is too large ({:.1}MB). Maximum size is 1MB.",
                            file.name(),
                            size as f64 / 1_048_576.0
                        ));
                        continue;
                    }

                    let buffer = match JsFuture::from(file.array_buffer())
                        .await
                    {
                        Ok(buffer) => buffer,
                        Err(e) => {
                            tracing::error!(?e, "failed to read file");
                            rejected =
                                Some(format!("Could not read {}", file.name()));
                            continue;
                        }
                    };
                    let data = js_sys::Uint8Array::new(&buffer).to_vec();

                    let content_type = if file.type_().is_empty() {
                        "application/octet-stream".to_string()
                    } else {
                        file.type_()
                    };

                    images.push(ImageFile {
                        file_name: file.name(),
                        content_type,
                        data,
                    });
                }

                file_error.set(rejected);
                if !images.is_empty() {
                    let mut next = (*form).clone();
                    next.add_images(images, &mut previews.borrow_mut());
                    form.set(next);
                }
            });
        })
    };

    let on_remove_image = {
        let form = form.clone();
        let previews = previews.clone();

        Callback::from(move |index: usize| {
            let mut next = (*form).clone();
            next.remove_image(index, &mut previews.borrow_mut());
            form.set(next);
        })
    };

    let on_toggle_facility = {
        let form = form.clone();

        Callback::from(move |id: payloads::FacilityId| {
            let mut next = (*form).clone();
            next.toggle_facility(id);
            form.set(next);
        })
    };

    let on_cancel = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::Rooms);
        })
    };

    let on_submit = {
        let form = form.clone();
        let is_saving = is_saving.clone();
        let toast = toast.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if *is_saving {
                return;
            }

            // Validate synchronously so inline errors render before any
            // network round trip.
            let mut working = (*form).clone();
            if !working.validate_all().is_empty() {
                form.set(working);
                return;
            }

            let form = form.clone();
            let is_saving = is_saving.clone();
            let effects = RouterEffects {
                toast: toast.clone(),
                navigator: navigator.clone(),
            };

            yew::platform::spawn_local(async move {
                is_saving.set(true);

                let coordinator =
                    SubmissionCoordinator::new(get_api_client(), effects);
                if coordinator.submit(&mut working).await.is_err() {
                    // Keep the form as the user left it so they can retry.
                    form.set(working);
                }

                is_saving.set(false);
            });
        })
    };

    let is_edit = matches!(form.mode(), Mode::Edit(_));
    let title = if is_edit { "Edit Room" } else { "Create New Room" };
    let preview_urls: Vec<String> = previews
        .borrow()
        .handles()
        .iter()
        .map(|handle| handle.url().to_string())
        .collect();

    html! {
        <div class="max-w-2xl mx-auto py-8 px-4">
            <div class="bg-white dark:bg-neutral-800 p-8 rounded-lg shadow-md">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100 mb-2">
                        {title}
                    </h1>
                </div>

                <form onsubmit={on_submit} class="space-y-6">
                    {text_field("room-number", "Room Number *", "e.g. 204",
                        form.room_number(), form.errors().get(Field::RoomNumber),
                        on_room_number)}
                    {text_field("price", "Price *", "Price per night",
                        form.price(), form.errors().get(Field::Price),
                        on_price)}
                    {text_field("capacity", "Capacity *", "Number of guests",
                        form.capacity(), form.errors().get(Field::Capacity),
                        on_capacity)}
                    {text_field("discount", "Discount *", "Discount percentage",
                        form.discount(), form.errors().get(Field::Discount),
                        on_discount)}

                    <div>
                        <label class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {"Facilities *"}
                        </label>
                        {match facilities_hook.data.as_ref() {
                            None if facilities_hook.is_loading => html! {
                                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                                    {"Loading facilities..."}
                                </p>
                            },
                            None => html! {
                                <p class="text-sm text-neutral-500 dark:text-neutral-400">
                                    {"No facilities available"}
                                </p>
                            },
                            Some(facilities) => html! {
                                <div class="grid grid-cols-2 gap-2">
                                    {for facilities.iter().map(|facility| {
                                        facility_checkbox(
                                            facility,
                                            form.facilities().contains(&facility.id),
                                            on_toggle_facility.clone(),
                                        )
                                    })}
                                </div>
                            },
                        }}
                        {field_error(form.errors().get(Field::Facilities))}
                    </div>

                    <div>
                        <label for="room-images" class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                            {if is_edit { "Add Images" } else { "Images *" }}
                        </label>
                        <input
                            type="file"
                            id="room-images"
                            accept="image/*"
                            multiple=true
                            onchange={on_file_select}
                            class="block w-full text-sm text-neutral-700 dark:text-neutral-300
                                   file:mr-4 file:py-2 file:px-4 file:rounded-md file:border-0
                                   file:text-sm file:font-medium
                                   file:bg-neutral-100 dark:file:bg-neutral-700
                                   file:text-neutral-700 dark:file:text-neutral-300
                                   hover:file:bg-neutral-200 dark:hover:file:bg-neutral-600"
                        />
                        {field_error(file_error.as_deref())}
                        {field_error(form.errors().get(Field::Images))}

                        if !preview_urls.is_empty() {
                            <div class="grid grid-cols-3 gap-3 mt-3">
                                {for preview_urls.iter().enumerate().map(|(i, url)| {
                                    let on_remove = {
                                        let on_remove_image = on_remove_image.clone();
                                        Callback::from(move |_| on_remove_image.emit(i))
                                    };
                                    html! {
                                        <div class="relative">
                                            <img
                                                src={url.clone()}
                                                alt={format!("Selected image {}", i + 1)}
                                                class="w-full h-24 object-cover rounded-md border border-neutral-200 dark:border-neutral-700"
                                            />
                                            <button
                                                type="button"
                                                onclick={on_remove}
                                                title="Remove"
                                                class="absolute top-1 right-1 w-6 h-6 rounded-full
                                                       bg-neutral-900/70 text-white text-xs
                                                       hover:bg-neutral-900 focus:outline-none"
                                            >
                                                {"×"}
                                            </button>
                                        </div>
                                    }
                                })}
                            </div>
                        }

                        if !props.stored_images.is_empty() {
                            <p class="text-sm text-neutral-500 dark:text-neutral-400 mt-3">
                                {"Current images"}
                            </p>
                            <div class="grid grid-cols-3 gap-3 mt-1">
                                {for props.stored_images.iter().map(|url| html! {
                                    <img
                                        src={url.clone()}
                                        alt="Stored room image"
                                        class="w-full h-24 object-cover rounded-md border border-neutral-200 dark:border-neutral-700 opacity-80"
                                    />
                                })}
                            </div>
                        }
                    </div>

                    <div class="flex space-x-3 pt-6 border-t border-neutral-200 dark:border-neutral-700">
                        <button
                            type="button"
                            onclick={on_cancel}
                            disabled={*is_saving}
                            class="flex-1 py-2 px-4 border border-neutral-300 dark:border-neutral-600
                                   rounded-md shadow-sm text-sm font-medium text-neutral-700 dark:text-neutral-300
                                   bg-white dark:bg-neutral-700 hover:bg-neutral-50 dark:hover:bg-neutral-600
                                   focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500
                                   disabled:opacity-50 disabled:cursor-not-allowed
                                   transition-colors duration-200"
                        >
                            {"Cancel"}
                        </button>

                        <button
                            type="submit"
                            disabled={*is_saving}
                            class="flex-1 flex justify-center py-2 px-4 border border-transparent
                                   rounded-md shadow-sm text-sm font-medium text-white
                                   bg-neutral-900 hover:bg-neutral-800
                                   dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                                   focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500
                                   disabled:opacity-50 disabled:cursor-not-allowed
                                   transition-colors duration-200"
                        >
                            {if *is_saving {
                                "Saving..."
                            } else if is_edit {
                                "Update Room"
                            } else {
                                "Create Room"
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Builds the clone-mutate-set callback for one text field.
fn text_setter(
    form: &UseStateHandle<RoomForm>,
    setter: fn(&mut RoomForm, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        setter(&mut next, input.value());
        form.set(next);
    })
}

fn text_field(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: &str,
    error: Option<&str>,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div>
            <label for={id} class="block text-sm font-medium text-neutral-700 dark:text-neutral-300 mb-2">
                {label}
            </label>
            <input
                type="text"
                id={id}
                value={value.to_string()}
                {oninput}
                class="w-full px-3 py-2 border border-neutral-300 dark:border-neutral-600
                       rounded-md shadow-sm bg-white dark:bg-neutral-700
                       text-neutral-900 dark:text-neutral-100
                       focus:outline-none focus:ring-2 focus:ring-neutral-500 focus:border-neutral-500
                       dark:focus:ring-neutral-400 dark:focus:border-neutral-400"
                placeholder={placeholder}
            />
            {field_error(error)}
        </div>
    }
}

fn field_error(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! {
            <p class="text-sm text-red-700 dark:text-red-400 mt-1">
                {message}
            </p>
        },
        None => html! {},
    }
}

fn facility_checkbox(
    facility: &responses::FacilityOption,
    checked: bool,
    on_toggle: Callback<payloads::FacilityId>,
) -> Html {
    let id = format!("facility-{}", facility.id);
    let onchange = {
        let facility_id = facility.id.clone();
        Callback::from(move |_| on_toggle.emit(facility_id.clone()))
    };

    html! {
        <div class="flex items-center">
            <input
                type="checkbox"
                id={id.clone()}
                {checked}
                {onchange}
                class="h-4 w-4 text-neutral-600 focus:ring-neutral-500 border-neutral-300 dark:border-neutral-600 rounded"
            />
            <label for={id} class="ml-2 text-sm font-medium text-neutral-700 dark:text-neutral-300">
                {&facility.name}
            </label>
        </div>
    }
}
