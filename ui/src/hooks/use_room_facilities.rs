use payloads::responses;
use yew::prelude::*;

use super::{FetchHookReturn, use_fetch};
use crate::get_api_client;

/// Fetches the facility options a room can be tagged with.
#[hook]
pub fn use_room_facilities() -> FetchHookReturn<Vec<responses::FacilityOption>>
{
    use_fetch((), || async move {
        let api_client = get_api_client();
        api_client
            .room_facilities()
            .await
            .map_err(|e| e.to_string())
    })
}
