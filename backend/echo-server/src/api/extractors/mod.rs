pub mod id_token_header;
