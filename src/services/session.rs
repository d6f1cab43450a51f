use futures::future::LocalBoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info};

use crate::client::{ApiError, CollectApi};
use crate::geography::GeographyApi;
use crate::geolocation::LocationSource;
use crate::models::common::Coordinate;
use crate::models::item::CollectibleItem;
use crate::models::point::ContactField;
use crate::services::form::PointForm;

/// User interaction events, one per handler in the browser form
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Input(ContactField, String),
    UfSelected(Option<String>),
    CitySelected(Option<String>),
    MapClicked(Coordinate),
    ItemToggled(i32),
    Submit,
}

/// Where the session ended up: still on the form, or past a successful
/// submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    CreatePoint,
    Success,
}

// Completions of in-flight lookups and submissions
enum DataEvent {
    PositionResolved(Option<Coordinate>),
    ItemsLoaded(Result<Vec<CollectibleItem>, ApiError>),
    StatesLoaded(Result<Vec<String>, ApiError>),
    CitiesLoaded(u64, Result<Vec<String>, ApiError>),
    SubmitFinished(Result<(), ApiError>),
}

/// Event loop driving one registration attempt: fires the mount-time
/// reference lookups, applies user events to the form, and resolves to a
/// route when a submission succeeds or the user walks away.
pub struct RegistrationSession<A, G, L> {
    api: A,
    geography: G,
    location: L,
    form: PointForm,
}

impl<A, G, L> RegistrationSession<A, G, L>
where
    A: CollectApi,
    G: GeographyApi,
    L: LocationSource,
{
    pub fn new(api: A, geography: G, location: L) -> Self {
        Self {
            api,
            geography,
            location,
            form: PointForm::new(),
        }
    }

    pub fn form(&self) -> &PointForm {
        &self.form
    }

    /// Run the form until a submission goes through or the event stream
    /// closes. Everything runs on this task: lookups complete in arbitrary
    /// order with no barrier between them, and each handler runs to
    /// completion before the next event is taken.
    pub async fn run(&mut self, mut events: UnboundedReceiver<FormEvent>) -> Route {
        let Self {
            api,
            geography,
            location,
            form,
        } = self;
        let api = &*api;
        let geography = &*geography;
        let location = &*location;

        let mut pending: FuturesUnordered<LocalBoxFuture<'_, DataEvent>> =
            FuturesUnordered::new();

        // Mount-time lookups: independent, fired exactly once, never retried
        pending.push(
            async move { DataEvent::PositionResolved(location.current_position().await) }
                .boxed_local(),
        );
        pending.push(async move { DataEvent::ItemsLoaded(api.fetch_items().await) }.boxed_local());
        pending.push(
            async move { DataEvent::StatesLoaded(geography.list_states().await) }.boxed_local(),
        );

        loop {
            tokio::select! {
                biased;

                Some(data) = pending.next(), if !pending.is_empty() => {
                    match data {
                        DataEvent::PositionResolved(Some(position)) => {
                            debug!(
                                "Initial map center set to ({}, {})",
                                position.latitude, position.longitude
                            );
                            form.set_position(position);
                        }
                        DataEvent::PositionResolved(None) => {
                            debug!("Device position unavailable, keeping default map center");
                        }
                        DataEvent::ItemsLoaded(Ok(items)) => {
                            info!("Loaded {} collectible items", items.len());
                            form.apply_items(items);
                        }
                        DataEvent::ItemsLoaded(Err(err)) => {
                            // The browser form leaves this empty; the item
                            // grid simply stays blank.
                            error!("Failed to load the item catalog: {}", err);
                        }
                        DataEvent::StatesLoaded(Ok(states)) => {
                            info!("Loaded {} states", states.len());
                            form.apply_states(states);
                        }
                        DataEvent::StatesLoaded(Err(err)) => {
                            error!("Failed to load the state list: {}", err);
                        }
                        DataEvent::CitiesLoaded(generation, Ok(names)) => {
                            if form.apply_cities(generation, names) {
                                debug!("City list replaced ({} entries)", form.cities().len());
                            }
                        }
                        DataEvent::CitiesLoaded(_, Err(err)) => {
                            error!("Failed to load the city list: {}", err);
                        }
                        DataEvent::SubmitFinished(Ok(())) => {
                            info!("Collection point registered");
                            return Route::Success;
                        }
                        DataEvent::SubmitFinished(Err(err)) => {
                            // The user stays on the form with their input
                            // intact, as in the browser form.
                            error!("Submission failed: {}", err);
                        }
                    }
                }

                maybe_event = events.recv() => {
                    match maybe_event {
                        Some(FormEvent::Input(field, value)) => {
                            form.set_contact_field(field, value);
                        }
                        Some(FormEvent::UfSelected(uf)) => {
                            if let Some(fetch) = form.select_uf(uf) {
                                pending.push(
                                    async move {
                                        DataEvent::CitiesLoaded(
                                            fetch.generation,
                                            geography.list_cities(&fetch.uf).await,
                                        )
                                    }
                                    .boxed_local(),
                                );
                            }
                        }
                        Some(FormEvent::CitySelected(city)) => {
                            form.select_city(city);
                        }
                        Some(FormEvent::MapClicked(position)) => {
                            form.set_position(position);
                        }
                        Some(FormEvent::ItemToggled(id)) => {
                            form.toggle_item(id);
                        }
                        Some(FormEvent::Submit) => {
                            let record = form.record();
                            info!("Submitting collection point for '{}'", record.name);
                            pending.push(
                                async move {
                                    DataEvent::SubmitFinished(api.create_point(record).await)
                                }
                                .boxed_local(),
                            );
                        }
                        None => {
                            debug!("Event stream closed before submission");
                            return Route::CreatePoint;
                        }
                    }
                }
            }
        }
    }
}
