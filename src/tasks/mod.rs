pub mod verify_password;
