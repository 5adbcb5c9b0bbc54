// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! User-facing strings. The sandbox UI is localized in Spanish.

pub const REQUEST_FAILED: &str = "Error en la petición";

// Accounts list
pub const ACCOUNTS_EMPTY: &str = "Todavía no hay cuentas de prueba. Crea la primera.";
pub const ACCOUNTS_LOAD_FAILED: &str =
    "No se pudieron cargar las cuentas. ¿Está levantado el backend de Povy?";
pub const ACCOUNT_CREATE_FAILED: &str = "No se pudo crear la cuenta.";
pub const CREATE_ACCOUNT_LABEL: &str = "Crear cuenta";
pub const CREATING_LABEL: &str = "Creando...";

// Account detail
pub const MISSING_ACCOUNT_PARAM: &str = "Falta el parámetro \"account\" en la URL.";
pub const ACCOUNT_LOAD_FAILED: &str = "No se pudo cargar la cuenta.";
pub const CURRENCY_UPDATE_FAILED: &str = "No se pudo actualizar la moneda.";
pub const INVALID_BALANCE_AMOUNT: &str = "Monto inválido. Usa un número mayor o igual a 0.";
pub const BALANCE_UPDATE_FAILED: &str = "No se pudo actualizar el saldo.";
pub const DELETE_CONFIRM: &str = "¿Seguro que quieres eliminar esta cuenta de prueba de Povy Sandbox? Esta acción no se puede deshacer.";
pub const ACCOUNT_DELETE_FAILED: &str = "No se pudo eliminar la cuenta.";
pub const TRANSACTIONS_EMPTY: &str = "Esta cuenta todavía no tiene movimientos.";
pub const TRANSACTIONS_LOAD_FAILED: &str = "No se pudo cargar el historial de transacciones.";

// Payments
pub const PAYMENT_REQUIRED_FIELDS: &str = "Completa número de cuenta y monto.";
pub const PAYMENT_FAILED: &str = "Datos inválidos o error al procesar el pago.";
pub const PAY_LABEL: &str = "Procesar pago de prueba";
pub const CARD_REQUIRED_FIELDS: &str =
    "Completa todos los datos de la tarjeta y el monto. El número debe tener 16 dígitos.";
pub const CARD_PAYMENT_FAILED: &str = "Datos inválidos o error al procesar el pago con tarjeta.";
pub const CARD_PAY_LABEL: &str = "Procesar pago con tarjeta";
pub const PROCESSING_LABEL: &str = "Procesando...";
pub const STATUS_APPROVED: &str = "APROBADO";
pub const STATUS_DECLINED: &str = "RECHAZADO";

// Clipboard
pub const COPIED_LABEL: &str = "Copiado";
