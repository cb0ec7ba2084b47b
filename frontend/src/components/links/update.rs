//! Update function for the links page.
//!
//! Form and filter messages only touch component state. Store messages
//! spawn the store operation on the local executor and come back as
//! `Msg::Synced` once it finishes, so several can be pending at a time.

use std::future::Future;
use std::rc::Rc;

use links_common::{LinkStore, Outcome, Snapshot};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::form::FormState;
use super::helpers::open_in_new_tab;
use super::messages::Msg;
use super::state::LinksComponent;
use crate::remote::HttpRemote;

/// Runs `op` against the store and reports the resulting snapshot.
fn dispatch<F, Fut>(component: &LinksComponent, ctx: &Context<LinksComponent>, op: F)
where
    F: FnOnce(Rc<LinkStore<HttpRemote>>) -> Fut + 'static,
    Fut: Future<Output = Snapshot> + 'static,
{
    let store = component.store.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let snapshot = op(store).await;
        link.send_message(Msg::Synced(snapshot));
    });
}

pub fn update(component: &mut LinksComponent, ctx: &Context<LinksComponent>, msg: Msg) -> bool {
    match msg {
        Msg::ShowForm => {
            component.form_visible = true;
            true
        }
        Msg::HideForm => {
            component.form_visible = false;
            true
        }
        Msg::EditField(field) => {
            component.form.apply(field);
            true
        }
        Msg::Submit => {
            match component.editing.take() {
                Some(original) => {
                    let updated = component.form.to_update(&original);
                    dispatch(component, ctx, move |store| async move { store.update(updated).await });
                }
                None => {
                    let draft = component.form.to_draft();
                    dispatch(component, ctx, move |store| async move { store.create(draft).await });
                }
            }
            component.form_visible = false;
            true
        }
        Msg::ClearForm => {
            component.form = FormState::default();
            component.editing = None;
            true
        }
        Msg::FilterQuery(query) => {
            component.projector.set_title_query(query);
            component.reproject();
            true
        }
        Msg::FilterType(link_type) => {
            component.projector.set_type(link_type);
            component.reproject();
            true
        }
        Msg::FilterPaid(paid) => {
            component.projector.set_paid(paid);
            component.reproject();
            true
        }
        Msg::Sort(sort) => {
            component.projector.set_sort(sort);
            component.reproject();
            true
        }
        Msg::ClearFilters => {
            component.projector.clear();
            component.reproject();
            true
        }
        Msg::View(id) => {
            let Some(record) = component.store.get(&id) else {
                return false;
            };
            match record.view_url() {
                Some(url) => open_in_new_tab(url),
                None => log::error!("The URL is empty!"),
            }
            false
        }
        Msg::Edit(id) => {
            let Some(record) = component.store.get(&id) else {
                return false;
            };
            component.form = FormState::from_link(&record);
            component.editing = Some(record);
            component.form_visible = true;
            true
        }
        Msg::Delete(id) => {
            if component.store.get(&id).is_none() {
                return false;
            }
            dispatch(component, ctx, move |store| async move { store.delete(&id).await });
            false
        }
        Msg::Refresh => {
            dispatch(component, ctx, |store| async move { store.list().await });
            false
        }
        Msg::Synced(snapshot) => {
            match snapshot.outcome {
                Outcome::Synced => log::debug!("table synced, {} links", snapshot.links.len()),
                Outcome::LocalOnly => log::info!("showing local changes, service unreachable"),
                Outcome::Stale => log::debug!("stale response ignored"),
            }
            component.last_outcome = Some(snapshot.outcome);
            component.reproject();
            true
        }
    }
}
