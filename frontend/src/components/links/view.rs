//! View rendering for the links page: header, add/edit form, filter bar,
//! and the links table.

use links_common::{Link, LinkType, PaidFilter, SortSpec, TypeFilter};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::form::{FormField, TYPE_PLACEHOLDER};
use super::helpers::{id_cell, submit_label, warning_cell};
use super::messages::Msg;
use super::state::LinksComponent;

const INPUT_CLASS: &str = "shadow-sm appearance-none border rounded w-full py-2 px-3 text-gray-700 leading-tight focus:outline-none focus:shadow-outline";
const FILTER_INPUT_CLASS: &str = "shadow-sm appearance-none border rounded py-2 px-3 text-gray-700 leading-tight focus:outline-none focus:shadow-outline";
const LABEL_CLASS: &str = "block mb-2 text-sm font-bold text-gray-700";
const HEADER_CELL_CLASS: &str = "px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider";

pub fn view(component: &LinksComponent, ctx: &Context<LinksComponent>) -> Html {
    let link = ctx.link();
    html! {
        <div class="container mx-auto">
            { build_header(component, link) }
            {
                if component.form_visible {
                    build_form(component, link)
                } else {
                    html! {}
                }
            }
            { build_filter_bar(component, link) }
            { build_table(&component.rows, link) }
        </div>
    }
}

fn build_header(component: &LinksComponent, link: &Scope<LinksComponent>) -> Html {
    html! {
        <div class="flex flex-col items-center mb-4">
            <h1 class="text-3xl font-bold mb-4 text-center">{"Helpful Links"}</h1>
            {
                if component.form_visible {
                    html! {}
                } else {
                    html! {
                        <button
                            class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"
                            onclick={link.callback(|_| Msg::ShowForm)}
                        >
                            {"Show Form"}
                        </button>
                    }
                }
            }
        </div>
    }
}

fn text_field<F>(link: &Scope<LinksComponent>, make: F) -> Callback<InputEvent>
where
    F: Fn(String) -> FormField + 'static,
{
    link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditField(make(input.value()))
    })
}

fn build_form(component: &LinksComponent, link: &Scope<LinksComponent>) -> Html {
    let form = &component.form;
    let type_value = form.type_value();

    let on_type = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::EditField(FormField::Type(LinkType::from(select.value().as_str())))
    });
    let on_description = link.callback(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::EditField(FormField::Description(textarea.value()))
    });
    let on_paid = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::EditField(FormField::Paid(input.checked()))
    });
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="bg-white rounded-lg shadow-md p-6 mb-4" onsubmit={on_submit}>
            <label for="inputTitle" class={LABEL_CLASS}>{"Title"}</label>
            <input type="text" id="inputTitle" name="title" class={INPUT_CLASS}
                placeholder="Website name goes here..."
                value={form.title.clone()}
                oninput={text_field(link, FormField::Title)} />

            <label for="inputUrl" class={LABEL_CLASS}>{"URL"}</label>
            <input type="url" id="inputUrl" name="url" class={INPUT_CLASS}
                placeholder="URL goes here..."
                value={form.url.clone()}
                oninput={text_field(link, FormField::Url)} />

            <label for="inputType" class={LABEL_CLASS}>{"Type"}</label>
            <select id="inputType" name="type" class={INPUT_CLASS} onchange={on_type}>
                <option value={TYPE_PLACEHOLDER} disabled=true selected={type_value == TYPE_PLACEHOLDER}>{"Choose type..."}</option>
                <option value="code" selected={type_value == "code"}>{"Code"}</option>
                <option value="music" selected={type_value == "music"}>{"Music"}</option>
            </select>

            <label for="inputDescription" class={LABEL_CLASS}>{"Description"}</label>
            <textarea id="inputDescription" name="description" class={INPUT_CLASS}
                placeholder="10 words max..."
                value={form.description.clone()}
                oninput={on_description} />

            <div class="flex items-center mb-4">
                <input type="checkbox" id="inputPaid" name="paid" class="mr-2 leading-tight"
                    checked={form.paid}
                    onchange={on_paid} />
                <label for="inputPaid" class="text-sm text-gray-700">{"Paid?"}</label>
            </div>

            <div class="mt-4 flex justify-between">
                <button type="submit"
                    class="bg-blue-500 hover:bg-blue-700 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline">
                    { submit_label(component.editing.is_some()) }
                </button>
                <button type="button"
                    class="bg-red-500 hover:bg-red-700 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"
                    onclick={link.callback(|_| Msg::ClearForm)}>
                    {"Clear Form"}
                </button>
            </div>
            <button type="button"
                class="bg-gray-500 hover:bg-gray-700 text-white font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline mt-4 w-full"
                onclick={link.callback(|_| Msg::HideForm)}>
                {"Hide Form"}
            </button>
        </form>
    }
}

fn build_filter_bar(component: &LinksComponent, link: &Scope<LinksComponent>) -> Html {
    let filter = component.projector.filter();
    let sort = component.projector.sort().control_value();

    let on_query = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FilterQuery(input.value())
    });
    let on_type = link.batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value().parse::<TypeFilter>().ok().map(Msg::FilterType)
    });
    let on_paid = link.batch_callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        select.value().parse::<PaidFilter>().ok().map(Msg::FilterPaid)
    });
    let on_sort = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::Sort(SortSpec::from_control(&select.value()))
    });

    let type_option = |value: TypeFilter, label: &str| {
        html! { <option value={value.as_str()} selected={filter.link_type == value}>{ label.to_string() }</option> }
    };
    let paid_option = |value: PaidFilter, label: &str| {
        html! { <option value={value.as_str()} selected={filter.paid == value}>{ label.to_string() }</option> }
    };
    let sort_option = |value: &'static str, label: &str| {
        html! { <option value={value} selected={sort == value}>{ label.to_string() }</option> }
    };

    html! {
        <div class="mb-4 p-4 rounded-md bg-white shadow-md flex gap-2">
            <input type="text" id="filterTitle" name="title" class={FILTER_INPUT_CLASS}
                placeholder="Filter by text..."
                value={filter.title_query.clone()}
                oninput={on_query} />
            <select id="filterSelectType" name="type" class={FILTER_INPUT_CLASS} onchange={on_type}>
                { type_option(TypeFilter::All, "Show all (types)...") }
                { type_option(TypeFilter::Code, "Code") }
                { type_option(TypeFilter::Music, "Music") }
            </select>
            <select id="filterSelectPaid" name="paid" class={FILTER_INPUT_CLASS} onchange={on_paid}>
                { paid_option(PaidFilter::All, "Show all (paid)...") }
                { paid_option(PaidFilter::Paid, "Paid") }
                { paid_option(PaidFilter::Free, "Free") }
            </select>
            <select id="sortSelect" name="sort" class={FILTER_INPUT_CLASS} onchange={on_sort}>
                <option value="all" disabled=true selected={sort == "all"}>{"Sort..."}</option>
                { sort_option("ascByTitle", "A-Z (title)") }
                { sort_option("descByTitle", "Z-A (title)") }
                { sort_option("ascByType", "A-Z (type)") }
                { sort_option("descByType", "Z-A (type)") }
                { sort_option("ascByPaid", "A-Z (paid)") }
                { sort_option("descByPaid", "Z-A (paid)") }
            </select>
            <button type="button" id="filterButtonClear" name="clear"
                class="bg-gray-300 hover:bg-gray-400 text-gray-800 font-bold py-2 px-4 rounded focus:outline-none focus:shadow-outline"
                onclick={link.callback(|_| Msg::ClearFilters)}>
                {"Clear All"}
            </button>
        </div>
    }
}

fn build_table(rows: &[Link], link: &Scope<LinksComponent>) -> Html {
    html! {
        <div class="overflow-x-auto shadow-sm rounded-lg">
            <table class="min-w-full divide-y divide-gray-200">
                <thead class="bg-gray-50">
                    <tr>
                        <th class={HEADER_CELL_CLASS}>{"ID"}</th>
                        <th class={HEADER_CELL_CLASS}>{"Title"}</th>
                        <th class={HEADER_CELL_CLASS}>{"Type"}</th>
                        <th class={HEADER_CELL_CLASS}>{"Description"}</th>
                        <th class={HEADER_CELL_CLASS}>{"$"}</th>
                        <th class={HEADER_CELL_CLASS}>{"View"}</th>
                        <th class={HEADER_CELL_CLASS}>{"Edit"}</th>
                        <th class={HEADER_CELL_CLASS}>{"Delete"}</th>
                        <th class={HEADER_CELL_CLASS}>{"⚠"}</th>
                    </tr>
                </thead>
                <tbody class="bg-white divide-y divide-gray-200">
                    { for rows.iter().map(|row| build_row(row, link)) }
                </tbody>
            </table>
        </div>
    }
}

fn row_button(label: &'static str, class: &'static str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <td class="py-2 px-4">
            <button type="button" class={format!("{} text-white font-bold py-1 px-2 rounded text-xs", class)} {onclick}>
                { label }
            </button>
        </td>
    }
}

fn build_row(row: &Link, link: &Scope<LinksComponent>) -> Html {
    let id = row.id.clone();
    let on_view = {
        let id = id.clone();
        link.callback(move |_| Msg::View(id.clone()))
    };
    let on_edit = {
        let id = id.clone();
        link.callback(move |_| Msg::Edit(id.clone()))
    };
    let on_delete = link.callback(move |_| Msg::Delete(id.clone()));

    html! {
        <tr class="border-b border-gray-200 hover:bg-gray-50">
            <td class="py-2 px-4 text-sm text-gray-500">{ id_cell(row).to_string() }</td>
            <td class="py-2 px-4 text-sm">{ row.title.clone() }</td>
            <td class="py-2 px-4 text-sm text-gray-500">{ row.link_type.as_str() }</td>
            <td class="py-2 px-4 text-sm text-gray-500">{ row.description.clone() }</td>
            <td class="py-2 px-4 text-sm text-gray-500">{ row.paid_label() }</td>
            { row_button("View", "bg-blue-500 hover:bg-blue-700", on_view) }
            { row_button("Edit", "bg-yellow-500 hover:bg-yellow-700", on_edit) }
            { row_button("Del", "bg-red-500 hover:bg-red-700", on_delete) }
            <td class="py-2 px-4 text-sm text-red-500">{ warning_cell(row) }</td>
        </tr>
    }
}
