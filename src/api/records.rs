//! Wire records as the backend sends them.
//!
//! The REST backend speaks Spanish on the wire; fields are renamed here so
//! the rest of the crate stays in one language. Every endpoint wraps its
//! documents in the same envelope.

use serde::{Deserialize, Serialize};

use crate::models::{CollectionPoint, Event, EventStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub message: String,
    pub total_documents: i64,
    pub documents: Vec<T>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryRecord {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "imagen")]
    pub image: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: i64,
    #[serde(rename = "categoriaId")]
    pub category_id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "imagen")]
    pub image: String,
    #[serde(rename = "cantidadReciclada")]
    pub recycled_count: i64,
    #[serde(rename = "impactoAmbiental")]
    pub environmental_impact: Vec<String>,
    #[serde(rename = "tipsReciclaje")]
    pub recycling_tips: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// `dd/mm/yyyy`.
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "estado")]
    pub status: String,
    #[serde(rename = "imagen")]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AchievementRecord {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "imagen")]
    pub image: String,
    #[serde(rename = "requisito")]
    pub requirement: String,
    #[serde(rename = "completado")]
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnboardingSlideRecord {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "imagen")]
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TipRecord {
    pub id: i64,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "imagen")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollectionPointRecord {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "latitud")]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "horarios")]
    pub schedule: Option<String>,
    #[serde(rename = "tiposAceptados")]
    pub accepted_materials: Option<Vec<String>>,
}

impl From<EventRecord> for Event {
    fn from(record: EventRecord) -> Self {
        // The backend's own status is only a seed; it gets overwritten by
        // the date-driven classification unless the date fails to parse.
        let status = if record.status == "Finalizado" {
            EventStatus::Finished
        } else {
            EventStatus::Upcoming
        };

        Event {
            id: record.id,
            title: record.title,
            description: record.description,
            date: record.date,
            status,
            image_ref: record.image,
        }
    }
}

impl From<CollectionPointRecord> for CollectionPoint {
    fn from(record: CollectionPointRecord) -> Self {
        CollectionPoint {
            id: record.id,
            name: record.name,
            address: record.address,
            latitude: record.latitude,
            longitude: record.longitude,
            is_active: true,
        }
    }
}
