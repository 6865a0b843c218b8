//! Seed routine for local development and demos.
//!
//! Clears every table, then inserts a representative dealership dataset:
//! users across all roles, clients, vehicles covering each fuel,
//! transmission and status, email cases in several lifecycle states,
//! waitlist requests with vehicle preferences, the knowledge base that
//! briefs the AI assistant, and a week of daily statistics snapshots.

use chrono::{Duration, Utc};

use crate::models::client::CreateClient;
use crate::models::daily_stats::CreateDailyStats;
use crate::models::email_case::CreateEmailCase;
use crate::models::enums::{
    EmailStatus, FuelType, Priority, Transmission, UserRole, VehicleStatus, WaitlistStatus,
};
use crate::models::knowledge_item::CreateKnowledgeItem;
use crate::models::user::CreateUser;
use crate::models::vehicle::CreateVehicle;
use crate::models::waitlist_request::CreateWaitlistRequest;
use crate::repositories::{
    ClientRepo, DailyStatsRepo, EmailCaseRepo, KnowledgeRepo, UserRepo, VehicleRepo, WaitlistRepo,
};
use crate::DbPool;

/// Wipe all tables and insert the demo dataset.
pub async fn run(pool: &DbPool) -> Result<(), sqlx::Error> {
    tracing::info!("Seeding database");

    sqlx::query(
        "TRUNCATE email_cases, waitlist_requests, vehicles, knowledge_items,
         clients, users, daily_stats",
    )
    .execute(pool)
    .await?;

    let admin = UserRepo::create(
        pool,
        &user("jean.dupont", "Jean Dupont", UserRole::Admin),
    )
    .await?;
    UserRepo::create(pool, &user("marie.martin", "Marie Martin", UserRole::Seller)).await?;
    UserRepo::create(
        pool,
        &user("pierre.durand", "Pierre Durand", UserRole::Seller),
    )
    .await?;
    UserRepo::create(
        pool,
        &user("sophie.bernard", "Sophie Bernard", UserRole::Readonly),
    )
    .await?;

    let lucas = ClientRepo::create(
        pool,
        &client("Lucas Moreau", "lucas.moreau@email.com", "06 12 34 56 78", true),
    )
    .await?;
    let emma = ClientRepo::create(
        pool,
        &client("Emma Leroy", "emma.leroy@email.com", "06 23 45 67 89", true),
    )
    .await?;
    let hugo = ClientRepo::create(
        pool,
        &client("Hugo Bernard", "hugo.bernard@email.com", "06 34 56 78 90", false),
    )
    .await?;
    ClientRepo::create(
        pool,
        &client("Chloé Dubois", "chloe.dubois@email.com", "06 45 67 89 01", true),
    )
    .await?;
    ClientRepo::create(
        pool,
        &client("Gabriel Petit", "gabriel.petit@email.com", "06 56 78 90 12", false),
    )
    .await?;

    let vehicles = [
        vehicle(
            "PEU-3008-001",
            "Peugeot",
            "3008",
            2023,
            FuelType::Hybrid,
            Transmission::Automatic,
            15_000,
            35_900,
            "Noir Perla",
            VehicleStatus::Available,
            true,
            "SUV familial hybride rechargeable, excellente autonomie électrique",
        ),
        vehicle(
            "REN-CLIO-002",
            "Renault",
            "Clio",
            2022,
            FuelType::Gasoline,
            Transmission::Manual,
            28_000,
            15_500,
            "Rouge Flamme",
            VehicleStatus::Available,
            true,
            "Citadine économique et fiable, idéale pour la ville",
        ),
        vehicle(
            "CIT-C3-003",
            "Citroën",
            "C3",
            2021,
            FuelType::Diesel,
            Transmission::Manual,
            45_000,
            12_900,
            "Blanc Banquise",
            VehicleStatus::Available,
            true,
            "Confort de conduite exceptionnel, faible consommation",
        ),
        vehicle(
            "TES-MOD3-004",
            "Tesla",
            "Model 3",
            2023,
            FuelType::Electric,
            Transmission::Automatic,
            8_000,
            42_900,
            "Bleu Nuit",
            VehicleStatus::Reserved,
            false,
            "Berline électrique premium, autonomie 500km, autopilot inclus",
        ),
        vehicle(
            "VW-GOLF-005",
            "Volkswagen",
            "Golf",
            2022,
            FuelType::Gasoline,
            Transmission::Automatic,
            22_000,
            24_500,
            "Gris Indium",
            VehicleStatus::Available,
            true,
            "Compacte premium, finition R-Line, toit ouvrant",
        ),
        vehicle(
            "BMW-X1-006",
            "BMW",
            "X1",
            2021,
            FuelType::Diesel,
            Transmission::Automatic,
            55_000,
            29_900,
            "Blanc Alpin",
            VehicleStatus::Sold,
            false,
            "SUV compact premium, excellent état, historique complet",
        ),
    ];
    for v in &vehicles {
        VehicleRepo::create(pool, v).await?;
    }

    EmailCaseRepo::create(
        pool,
        &CreateEmailCase {
            client_id: Some(lucas.id),
            subject: "Demande d'essai Peugeot 3008".into(),
            content: "Bonjour,\n\nJe suis intéressé par le Peugeot 3008 hybride que j'ai vu sur \
                      votre site. Serait-il possible d'organiser un essai ce week-end ?\n\n\
                      Merci d'avance,\nLucas Moreau"
                .into(),
            sender_email: "lucas.moreau@email.com".into(),
            sender_name: Some("Lucas Moreau".into()),
            attachments: None,
            status: Some(EmailStatus::New),
            priority: Some(Priority::High),
            ai_reason: Some("Demande d'essai - nécessite planification".into()),
            needs_human: Some(true),
            assigned_to: None,
            vehicle_id: None,
            internal_notes: None,
            draft_response: None,
        },
    )
    .await?;
    EmailCaseRepo::create(
        pool,
        &CreateEmailCase {
            client_id: Some(emma.id),
            subject: "Question sur le financement".into(),
            content: "Bonjour,\n\nJe souhaiterais avoir plus d'informations sur les options de \
                      financement disponibles.\n\nCordialement,\nEmma Leroy"
                .into(),
            sender_email: "emma.leroy@email.com".into(),
            sender_name: Some("Emma Leroy".into()),
            attachments: None,
            status: Some(EmailStatus::InProgress),
            priority: Some(Priority::Medium),
            ai_reason: Some("Question financière complexe".into()),
            needs_human: Some(true),
            assigned_to: Some(admin.id),
            vehicle_id: None,
            internal_notes: None,
            draft_response: None,
        },
    )
    .await?;
    EmailCaseRepo::create(
        pool,
        &CreateEmailCase {
            client_id: Some(hugo.id),
            subject: "Réclamation - Problème technique".into(),
            content: "Bonjour,\n\nLe GPS ne fonctionne plus correctement depuis la dernière mise \
                      à jour. Merci de me recontacter rapidement.\n\nHugo Bernard"
                .into(),
            sender_email: "hugo.bernard@email.com".into(),
            sender_name: Some("Hugo Bernard".into()),
            attachments: None,
            status: Some(EmailStatus::New),
            priority: Some(Priority::High),
            ai_reason: Some("Réclamation client".into()),
            needs_human: Some(true),
            assigned_to: None,
            vehicle_id: None,
            internal_notes: None,
            draft_response: None,
        },
    )
    .await?;
    EmailCaseRepo::create(
        pool,
        &CreateEmailCase {
            client_id: None,
            subject: "Disponibilité Tesla Model 3".into(),
            content: "Bonjour,\n\nAvez-vous des Tesla Model 3 disponibles actuellement ? Je \
                      recherche un modèle récent avec moins de 30000 km."
                .into(),
            sender_email: "prospect@email.com".into(),
            sender_name: None,
            attachments: None,
            status: Some(EmailStatus::New),
            priority: Some(Priority::Low),
            ai_reason: Some("Question stock - véhicule spécifique indisponible".into()),
            needs_human: Some(true),
            assigned_to: None,
            vehicle_id: None,
            internal_notes: None,
            draft_response: None,
        },
    )
    .await?;

    WaitlistRepo::create(
        pool,
        &CreateWaitlistRequest {
            client_id: Some(lucas.id),
            client_name: "Lucas Moreau".into(),
            phone: "06 12 34 56 78".into(),
            sms_consent: Some(true),
            status: Some(WaitlistStatus::Waiting),
            priority: Some(Priority::High),
            brand_preference: Some("Peugeot".into()),
            model_preference: Some("3008".into()),
            year_min: Some(2022),
            year_max: None,
            fuel_preference: Some(FuelType::Hybrid),
            transmission_preference: Some(Transmission::Automatic),
            max_mileage: None,
            max_budget: Some(40_000),
            color_preference: None,
            notes: None,
            contact_history: None,
        },
    )
    .await?;
    WaitlistRepo::create(
        pool,
        &CreateWaitlistRequest {
            client_id: None,
            client_name: "Thomas Petit".into(),
            phone: "06 78 90 12 34".into(),
            sms_consent: Some(true),
            status: Some(WaitlistStatus::Contacted),
            priority: Some(Priority::High),
            brand_preference: Some("Tesla".into()),
            model_preference: None,
            year_min: Some(2022),
            year_max: None,
            fuel_preference: Some(FuelType::Electric),
            transmission_preference: None,
            max_mileage: None,
            max_budget: Some(50_000),
            color_preference: None,
            notes: Some("Très intéressé, rappeler cette semaine".into()),
            contact_history: Some(
                "15/01/2026 - Premier contact par téléphone, intéressé par Tesla Model 3 ou Y"
                    .into(),
            ),
        },
    )
    .await?;
    WaitlistRepo::create(
        pool,
        &CreateWaitlistRequest {
            client_id: None,
            client_name: "Antoine Rousseau".into(),
            phone: "06 90 12 34 56".into(),
            sms_consent: Some(true),
            status: Some(WaitlistStatus::Converted),
            priority: Some(Priority::Medium),
            brand_preference: Some("BMW".into()),
            model_preference: Some("X1".into()),
            year_min: Some(2020),
            year_max: None,
            fuel_preference: None,
            transmission_preference: None,
            max_mileage: None,
            max_budget: Some(35_000),
            color_preference: None,
            notes: None,
            contact_history: Some("10/01/2026 - Vendu BMW X1 réf BMW-X1-006".into()),
        },
    )
    .await?;

    let knowledge: &[(&str, &str, &str)] = &[
        ("hours", "monday", "09:00 - 18:00"),
        ("hours", "tuesday", "09:00 - 18:00"),
        ("hours", "wednesday", "09:00 - 18:00"),
        ("hours", "thursday", "09:00 - 18:00"),
        ("hours", "friday", "09:00 - 18:00"),
        ("hours", "saturday", "10:00 - 17:00"),
        ("hours", "sunday", "Fermé"),
        ("contact", "address", "123 Avenue des Voitures\n75001 Paris"),
        ("contact", "phone_sales", "01 23 45 67 89"),
        ("contact", "email_sales", "vente@autoconcession.fr"),
        (
            "procedure",
            "test_drive",
            "Essai gratuit sur rendez-vous. Permis de conduire et pièce d'identité requis.",
        ),
        (
            "procedure",
            "trade_in",
            "Estimation gratuite de votre véhicule actuel. Apporter carte grise et clés.",
        ),
        ("ai_rules", "tone", "professional"),
        ("ai_rules", "signature", "L'équipe AutoConcession"),
        (
            "ai_rules",
            "human_cases",
            "Négociation de prix, réclamation, demande de reprise, question juridique",
        ),
        (
            "faq",
            "warranty",
            "Tous nos véhicules d'occasion bénéficient d'une garantie minimum de 12 mois.",
        ),
    ];
    for (category, key, value) in knowledge {
        KnowledgeRepo::create(
            pool,
            &CreateKnowledgeItem {
                category: (*category).into(),
                key: (*key).into(),
                value: (*value).into(),
                updated_by: Some(admin.id),
            },
        )
        .await?;
    }

    let today = Utc::now();
    for days_ago in 0..7 {
        DailyStatsRepo::create(
            pool,
            &CreateDailyStats {
                date: today - Duration::days(days_ago),
                total_emails: Some(20 + days_ago as i32),
                ai_responses: Some(13 + days_ago as i32),
                human_escalations: Some(7),
                avg_response_time_minutes: Some(135),
                total_calls: Some(30 + days_ago as i32),
                ai_handled_calls: Some(24),
                transferred_calls: Some(6),
                avg_call_duration_seconds: Some(270),
                waitlist_conversions: Some(2),
            },
        )
        .await?;
    }

    tracing::info!("Database seeded");
    Ok(())
}

fn user(username: &str, display_name: &str, role: UserRole) -> CreateUser {
    CreateUser {
        username: username.into(),
        password: "password123".into(),
        display_name: Some(display_name.into()),
        role: Some(role),
    }
}

fn client(name: &str, email: &str, phone: &str, sms_consent: bool) -> CreateClient {
    CreateClient {
        name: name.into(),
        email: Some(email.into()),
        phone: Some(phone.into()),
        sms_consent: Some(sms_consent),
        notes: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn vehicle(
    reference: &str,
    brand: &str,
    model: &str,
    year: i32,
    fuel: FuelType,
    transmission: Transmission,
    mileage: i32,
    price: i32,
    color: &str,
    status: VehicleStatus,
    ai_usable: bool,
    description: &str,
) -> CreateVehicle {
    CreateVehicle {
        reference: reference.into(),
        brand: brand.into(),
        model: model.into(),
        year,
        fuel,
        transmission,
        mileage,
        price,
        color: Some(color.into()),
        status: Some(status),
        ai_usable: Some(ai_usable),
        description: Some(description.into()),
        photos: None,
        internal_notes: None,
    }
}
