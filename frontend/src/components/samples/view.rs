use crud_common::model::sample::SampleRecord;
use crud_common::pages::samples::SampleMsg;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::SamplesPage;
use crate::components::helpers::format_local_time;

pub fn view(page: &SamplesPage, ctx: &Context<SamplesPage>) -> Html {
    let link = ctx.link();
    let state = &page.state;

    html! {
        <main style="max-width:640px;margin:40px auto;font-family:system-ui,sans-serif;">
            <h1 style="font-size:24px;font-weight:700;">{"Sample CRUD"}</h1>
            <div style="display:flex;gap:8px;margin-top:16px;">
                <input
                    value={state.name.clone()}
                    placeholder="name"
                    oninput={link.callback(|e: InputEvent| {
                        SampleMsg::EditName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    style="flex:1;padding:8px;border:1px solid #ddd;border-radius:8px;"
                />
                <button
                    onclick={link.callback(|_| SampleMsg::Add)}
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

fn build_row(row: &SampleRecord) -> Html {
    html! {
        <li key={row.id} style="padding:12px;border:1px solid #eee;border-radius:8px;margin-bottom:8px;">
            <div style="font-weight:600;">{ row.name.clone() }</div>
            <div style="font-size:12px;color:#666;">{ format_local_time(&row.created_at) }</div>
        </li>
    }
}
