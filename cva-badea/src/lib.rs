//! Core types and feed client for the Junta de Andalucía COVID-19 feed
//! published through BADEA (Banco de Datos Estadísticos de Andalucía).
//!
//! Data flows one way: a [`feed::RawFeed`] is fetched (and memoized per
//! clock hour) by [`cache::FeedFetcher`], then [`feed::normalize`] turns it
//! into an [`observation::ObservationTable`].

pub mod cache;
#[cfg(feature = "api")]
pub mod client;
pub mod error;
pub mod feed;
pub mod observation;
pub mod region;
pub mod snapshot;

/// Fixed BADEA export endpoint for the COVID-19 diagnosis cube.
pub const FEED_URL: &str = "https://www.juntadeandalucia.es/institutodeestadisticaycartografia/badea/stpivot/stpivot/Print?cube=387d5cdb-7026-4f4b-beb2-fb7e511cc485&type=3&foto=si&ejecutaDesde=&codConsulta=39409&consTipoVisua=JP";

/// Human-facing page describing the data source.
pub const SOURCE_URL: &str = "https://www.juntadeandalucia.es/institutodeestadisticaycartografia/badea/operaciones/consulta/anual/39409?CodOper=b3_2314&codConsulta=39409";

/// Attribution shown next to every rendering of the data.
pub const SOURCE_NAME: &str = "Junta de Andalucía: Consejería de Salud y Familias";
