use yew::prelude::*;

use super::StatusPage;

pub fn view(page: &StatusPage, _ctx: &Context<StatusPage>) -> Html {
    let state = &page.state;
    let dot = format!(
        "width:12px;height:12px;border-radius:50%;display:inline-block;background:{};",
        state.indicator_color()
    );

    html! {
        <main style="max-width:720px;margin:40px auto;font-family:system-ui,sans-serif;">
            <h1 style="font-size:24px;font-weight:700;">{"System Status"}</h1>

            <div style="display:flex;align-items:center;gap:8px;margin-top:16px;">
                <span style={dot} />
                <span>{ state.db_label() }</span>
            </div>

            {
                if let Some(info) = state.info_pretty() {
                    html! {
                        <pre style="background:#f7f7f7;padding:12px;border-radius:8px;margin-top:12px;">
                            { info }
                        </pre>
                    }
                } else {
                    html! {}
                }
            }

            {
                if let Some(error) = state.error_label() {
                    html! { <div style="color:crimson;margin-top:12px;">{ error }</div> }
                } else {
                    html! {}
                }
            }
        </main>
    }
}
