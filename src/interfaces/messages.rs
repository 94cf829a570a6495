//! Every line of text the program shows to a customer.
//!
//! Prompts are stored without their trailing `": "`; the console adds it.

/// A complete table of user-facing text for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct Messages {
    pub welcome: &'static str,
    pub pizza_prompt: &'static str,
    pub invalid_pizza: &'static str,
    pub payment_prompt: &'static str,
    pub credit_card_prompt: &'static str,
    pub debit_card_prompt: &'static str,
    pub tax_id_prompt: &'static str,
    pub invalid_payment: &'static str,
    /// Opens a confirmation line, before the amount.
    pub payment_of: &'static str,
    pub by_credit_card: &'static str,
    pub by_debit_card: &'static str,
    pub by_pix: &'static str,
    pub tax_id_label: &'static str,
    pub success: &'static str,
}

impl Messages {
    pub const EN: Messages = Messages {
        welcome: "Welcome to PizzaDuChefin!",
        pizza_prompt: "Choose the pizza (Portuguesa/Calabresa)",
        invalid_pizza: "Invalid pizza option.",
        payment_prompt: "Choose the payment method (Credit Card/Debit Card/Pix)",
        credit_card_prompt: "Enter the credit card number",
        debit_card_prompt: "Enter the debit card number",
        tax_id_prompt: "Enter the store's tax ID (CNPJ)",
        invalid_payment: "Invalid payment method.",
        payment_of: "Payment of",
        by_credit_card: "by credit card",
        by_debit_card: "by debit card",
        by_pix: "by Pix",
        tax_id_label: "tax ID",
        success: "Order placed successfully!",
    };

    pub const PT: Messages = Messages {
        welcome: "Bem-vindo ao PizzaDuChefin!",
        pizza_prompt: "Escolha a pizza (Portuguesa/Calabresa)",
        invalid_pizza: "Opção de pizza inválida.",
        payment_prompt: "Escolha a forma de pagamento (Cartão de Crédito/Cartão de Débito/Pix)",
        credit_card_prompt: "Digite o número do cartão de crédito",
        debit_card_prompt: "Digite o número do cartão de débito",
        tax_id_prompt: "Digite o CNPJ da loja",
        invalid_payment: "Forma de pagamento inválida.",
        payment_of: "Pagamento de",
        by_credit_card: "com cartão de crédito",
        by_debit_card: "com cartão de débito",
        by_pix: "com Pix",
        tax_id_label: "CNPJ",
        success: "Pedido realizado com sucesso!",
    };
}
