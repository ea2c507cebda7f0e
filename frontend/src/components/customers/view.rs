//! Form on top (id, name, age, gender) with Create / Update / Find, and the
//! customer list below with Edit / Delete per row.

use crud_common::model::customer::{Customer, Gender};
use crud_common::pages::customers::{CustomerManager, CustomerMsg};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::CustomersPage;

pub fn view(page: &CustomersPage, ctx: &Context<CustomersPage>) -> Html {
    let link = ctx.link();
    let state = &page.state;

    html! {
        <main style="max-width:800px;margin:40px auto;font-family:system-ui,sans-serif;">
            <h1 style="font-size:24px;font-weight:700;">{"Customers"}</h1>
            { build_form(state, link) }
            <div style="display:flex;gap:8px;margin-top:12px;">
                <button onclick={link.callback(|_| CustomerMsg::Create)} disabled={state.busy}>{"Create"}</button>
                <button onclick={link.callback(|_| CustomerMsg::Update)} disabled={state.busy}>{"Update"}</button>
                <button onclick={link.callback(|_| CustomerMsg::Lookup)}>{"Find"}</button>
            </div>
            <ul style="margin-top:24px;padding:0;list-style:none;">
                { for state.rows.iter().map(|row| build_row(row, link)) }
            </ul>
        </main>
    }
}

fn build_form(state: &CustomerManager, link: &Scope<CustomersPage>) -> Html {
    let form = &state.form;
    let mut genders = Gender::ALL.to_vec();
    if !genders.contains(&form.gender) {
        genders.push(form.gender.clone());
    }

    html! {
        <div style="display:grid;grid-template-columns:1fr 1fr;gap:12px;margin-top:16px;">
            <input
                placeholder="customer_id"
                value={form.customer_id.clone()}
                oninput={link.callback(|e: InputEvent| CustomerMsg::EditId(input_value(&e)))}
            />
            <input
                placeholder="customer_name"
                value={form.customer_name.clone()}
                oninput={link.callback(|e: InputEvent| CustomerMsg::EditName(input_value(&e)))}
            />
            <input
                placeholder="age"
                type="number"
                min="0"
                value={state.age_text()}
                oninput={link.callback(|e: InputEvent| CustomerMsg::EditAge(input_value(&e)))}
            />
            <select
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    CustomerMsg::EditGender(Gender::from_select(&select.value()))
                })}
            >
                { for genders.iter().map(|gender| html! {
                    <option value={gender.as_str().to_string()} selected={*gender == form.gender}>
                        { gender.as_str().to_string() }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn build_row(row: &Customer, link: &Scope<CustomersPage>) -> Html {
    let fill = {
        let row = row.clone();
        link.callback(move |_| CustomerMsg::Fill(row.clone()))
    };
    let remove = {
        let customer_id = row.customer_id.clone();
        link.callback(move |_| CustomerMsg::Remove(customer_id.clone()))
    };

    html! {
        <li key={row.customer_id.clone()} style="padding:12px;border:1px solid #eee;border-radius:8px;margin-bottom:8px;">
            <div>{ row.row_label() }</div>
            <div style="margin-top:6px;">
                <button onclick={fill} style="margin-right:8px;">{"Edit"}</button>
                <button onclick={remove}>{"Delete"}</button>
            </div>
        </li>
    }
}

fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}
