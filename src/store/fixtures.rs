//! Datos semilla de las colecciones
//!
//! Cada colección arranca con estos registros; al no haber persistencia,
//! un reinicio del proceso vuelve exactamente a este estado.

use rust_decimal::Decimal;

use crate::models::inventory::InventoryItem;
use crate::models::invoice::{Invoice, InvoiceStatus};
use crate::models::payment::{Payment, PaymentMethod};
use crate::models::vehicle::{Vehicle, VehicleStatus};

fn vehicle(id: &str, make: &str, model: &str, year: i32, vin: &str, status: VehicleStatus) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        make: make.to_string(),
        model: model.to_string(),
        year,
        vin: vin.to_string(),
        status,
    }
}

pub fn seed_vehicles() -> Vec<Vehicle> {
    use VehicleStatus::*;
    vec![
        vehicle("V001", "Ford", "Transit", 2022, "1FTBW2CM5NKA10394", Active),
        vehicle("V002", "Mercedes", "Sprinter", 2021, "WD4PF0CD1MP264811", Maintenance),
        vehicle("V003", "Chevrolet", "Express", 2023, "1GCWGAFP6P1157220", Active),
        vehicle("V004", "Ram", "ProMaster", 2020, "3C6TRVAG8LE109475", Active),
        vehicle("V005", "Nissan", "NV200", 2019, "3N6CM0KN7KK700812", Inactive),
        vehicle("V006", "Ford", "F-150", 2023, "1FTFW1E53PFA22148", Active),
        vehicle("V007", "Toyota", "HiAce", 2021, "JTFSX22P9M0104577", Active),
        vehicle("V008", "Iveco", "Daily", 2020, "ZCFC135B405318866", Maintenance),
        vehicle("V009", "Volkswagen", "Crafter", 2022, "WV1ZZZSYZN9037251", Active),
        vehicle("V010", "Fiat", "Ducato", 2018, "ZFA25000002C48119", Inactive),
        vehicle("V011", "Mercedes", "Vito", 2023, "W1V44760313982704", Active),
        vehicle("V012", "Ford", "Transit Connect", 2021, "NM0LS7E24M1480936", Active),
    ]
}

fn invoice(
    id: &str,
    client: &str,
    cents: i64,
    date: &str,
    due_date: &str,
    description: &str,
    status: InvoiceStatus,
) -> Invoice {
    Invoice {
        id: id.to_string(),
        client: client.to_string(),
        amount: Decimal::new(cents, 2),
        date: date.to_string(),
        due_date: due_date.to_string(),
        description: description.to_string(),
        status,
    }
}

pub fn seed_invoices() -> Vec<Invoice> {
    use InvoiceStatus::*;
    vec![
        invoice("INV001", "Acme Corp", 120050, "2024-07-15", "2024-08-15", "Web Development Services", Paid),
        invoice("INV002", "Globex Inc", 85000, "2024-07-20", "2024-08-20", "Consulting Hours", Pending),
        invoice("INV003", "Stark Industries", 250075, "2024-07-22", "2024-08-01", "Hardware Supplies", Overdue),
        invoice("INV004", "Wayne Enterprises", 150000, "2024-06-10", "2024-07-10", "Security System Upgrade", Paid),
        invoice("INV005", "Cyberdyne Systems", 320000, "2024-06-25", "2024-07-25", "AI Model Training", Pending),
        invoice("INV006", "Ollivanders Wand Shop", 7550, "2024-05-30", "2024-06-15", "Unicorn Hair Restock", Overdue),
        invoice("INV007", "Soylent Corp", 99999, "2024-07-01", "2024-07-31", "Food Product Delivery", Pending),
        invoice("INV008", "Pied Piper", 500000, "2024-07-10", "2024-08-10", "Compression Algorithm License", Paid),
        invoice("INV009", "Stark Industries", 180000, "2024-08-01", "2024-09-01", "Arc Reactor Maintenance", Pending),
        invoice("INV010", "Gekko & Co", 1000000, "2024-06-01", "2024-07-01", "Financial Consulting", Overdue),
        invoice("INV011", "Acme Corp", 75025, "2024-08-05", "2024-09-05", "Cloud Hosting Services", Pending),
        invoice("INV012", "Globex Inc", 22000, "2024-08-10", "2024-09-10", "Gadget Prototypes", Paid),
    ]
}

fn item(id: &str, name: &str, quantity: u32, location: &str, sku: &str) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        quantity,
        location: location.to_string(),
        sku: Some(sku.to_string()),
    }
}

pub fn seed_inventory() -> Vec<InventoryItem> {
    vec![
        item("P001", "Oil Filter", 50, "Shelf A1", "OF-1023"),
        item("P002", "Brake Pads (Set)", 25, "Bin B3", "BP-4050"),
        item("P003", "Headlight Bulb", 100, "Shelf A2", "HB-H4"),
        item("P004", "Spark Plugs (4x)", 75, "Shelf C1", "SP-004X"),
        item("P005", "Air Filter", 40, "Shelf A1", "AF-1055"),
        item("P006", "Wiper Blades (Pair)", 60, "Bin D2", "WB-2224"),
        item("P007", "Battery (Group 35)", 15, "Shelf B2", "BAT-G35"),
        item("P008", "Coolant (Gallon)", 30, "Storage Area 1", "CLT-GL"),
        item("P009", "Brake Fluid (DOT4)", 20, "Storage Area 1", "BF-DT4"),
        item("P010", "Tire Pressure Gauge", 10, "Tool Cabinet", "TPG-001"),
        item("P011", "Transmission Fluid (ATF)", 22, "Shelf C2", "TF-ATF"),
        item("P012", "Power Steering Fluid", 18, "Shelf C2", "PSF-01"),
    ]
}

fn payment(id: &str, invoice_id: &str, cents: i64, date: &str, method: PaymentMethod) -> Payment {
    Payment {
        id: id.to_string(),
        invoice_id: invoice_id.to_string(),
        amount: Decimal::new(cents, 2),
        date: date.to_string(),
        method,
    }
}

pub fn seed_payments() -> Vec<Payment> {
    use PaymentMethod::*;
    vec![
        payment("PAY001", "INV001", 120050, "2024-07-18", CreditCard),
        payment("PAY002", "INV004", 50000, "2024-07-21", BankTransfer),
        payment("PAY003", "INV005", 30025, "2024-07-23", Check),
        payment("PAY004", "INV002", 85000, "2024-07-25", Cash),
        payment("PAY005", "INV008", 500000, "2024-07-28", CreditCard),
        payment("PAY006", "INV012", 22000, "2024-08-12", BankTransfer),
        payment("PAY007", "INV001", 5000, "2024-08-15", Other),
    ]
}
