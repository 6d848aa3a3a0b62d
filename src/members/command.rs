pub mod add_member_cmd;
