use payloads::responses;
use room_form::{Mode, RoomForm};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::components::RoomEditor;

#[function_component]
pub fn CreateRoomPage() -> Html {
    html! {
        <RoomEditor initial={RoomForm::new(Mode::Create)} />
    }
}

/// Edit page. The listing navigates here with the stored record attached as
/// navigation state; a deep link has no record to seed from, so it bounces
/// back to the listing.
#[function_component]
pub fn EditRoomPage() -> Html {
    let navigator = use_navigator().unwrap();
    let location = use_location().unwrap();
    let seed = location.state::<responses::Room>();

    {
        let navigator = navigator.clone();
        let missing = seed.is_none();
        use_effect_with(missing, move |missing| {
            if *missing {
                navigator.push(&Route::Rooms);
            }
        });
    }

    match seed {
        Some(room) => html! {
            <RoomEditor
                initial={RoomForm::seeded(&room)}
                stored_images={room.images.clone()}
            />
        },
        None => html! {},
    }
}
