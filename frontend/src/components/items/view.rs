use crud_common::model::item::Item;
use crud_common::pages::items::ItemMsg;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::ItemsPage;
use crate::components::helpers::format_local_time;

pub fn view(page: &ItemsPage, ctx: &Context<ItemsPage>) -> Html {
    let link = ctx.link();
    let state = &page.state;

    html! {
        <main style="max-width:640px;margin:40px auto;font-family:system-ui,sans-serif;">
            <h1 style="font-size:24px;font-weight:700;">{"Items"}</h1>
            <div style="display:flex;gap:8px;margin-top:16px;">
                <input
                    value={state.item_name.clone()}
                    placeholder="item_name"
                    oninput={link.callback(|e: InputEvent| {
                        ItemMsg::EditName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    style="flex:2;padding:8px;border:1px solid #ddd;border-radius:8px;"
                />
                <input
                    value={state.price.clone()}
                    placeholder="price"
                    inputmode="decimal"
                    oninput={link.callback(|e: InputEvent| {
                        ItemMsg::EditPrice(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    style="flex:1;padding:8px;border:1px solid #ddd;border-radius:8px;"
                />
                <button
                    onclick={link.callback(|_| ItemMsg::Add)}
                    disabled={state.busy}
                    style="padding:8px 16px;border-radius:8px;border:1px solid #ddd;"
                >
                    {"Add"}
                </button>
            </div>
            <ul style="margin-top:24px;padding:0;list-style:none;">
                { for state.rows.iter().map(build_row) }
            </ul>
        </main>
    }
}

fn build_row(row: &Item) -> Html {
    html! {
        <li key={row.item_id.clone()} style="padding:12px;border:1px solid #eee;border-radius:8px;margin-bottom:8px;">
            <div style="font-weight:600;">{ row.row_label() }</div>
            <div style="font-size:12px;color:#666;">{ format_local_time(&row.created_at) }</div>
        </li>
    }
}
