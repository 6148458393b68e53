use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Landing page for room administration. The editor navigates back here
/// after a successful save.
#[function_component]
pub fn RoomsPage() -> Html {
    let navigator = use_navigator().unwrap();

    let on_add_room = {
        let navigator = navigator.clone();
        Callback::from(move |_| {
            navigator.push(&Route::CreateRoom);
        })
    };

    html! {
        <main class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
            <div class="flex items-center justify-between mb-6">
                <div>
                    <h1 class="text-2xl font-bold text-neutral-900 dark:text-neutral-100">
                        {"Rooms"}
                    </h1>
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Manage the rooms guests can book."}
                    </p>
                </div>
                <button
                    onclick={on_add_room}
                    class="py-2 px-4 border border-transparent rounded-md shadow-sm
                           text-sm font-medium text-white
                           bg-neutral-900 hover:bg-neutral-800
                           dark:bg-neutral-100 dark:text-neutral-900 dark:hover:bg-neutral-200
                           focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-neutral-500
                           transition-colors duration-200"
                >
                    {"Add New Room"}
                </button>
            </div>
        </main>
    }
}
