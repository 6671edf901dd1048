mod checkin_test;
